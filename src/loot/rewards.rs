//! Weighted reward resolution for a completed search.
//!
//! Resolution is pure with respect to engine state: it consumes the random
//! source and the configured catalogs and produces a tagged outcome. Applying
//! the outcome to the player is a separate step in `systems.rs`, so the
//! weighted draw stays independently testable.
use bevy::prelude::Resource;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    loot::config::LootItem,
    player::components::WeaponKind,
};

/// The engine's random source, entropy-seeded at startup.
#[derive(Resource)]
pub struct LootRng(pub StdRng);

impl Default for LootRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Outcome category of one uniform percentage draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardBucket {
    Item,
    Weapon,
    Money,
}

impl RewardBucket {
    /// Buckets a roll in `[0, 100]`: `p <= 45` item, `45 < p <= 90` weapon,
    /// `p > 90` money.
    pub fn from_roll(roll: f32) -> Self {
        if roll <= 45.0 {
            RewardBucket::Item
        } else if roll <= 90.0 {
            RewardBucket::Weapon
        } else {
            RewardBucket::Money
        }
    }
}

/// A fully resolved reward, ready to be applied to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardOutcome {
    Item(LootItem),
    Weapon(WeaponKind),
    Money(i64),
}

/// The one explicit resolution failure: nothing configured to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardError {
    EmptyCatalog,
}

/// Draws a weighted bucket and a uniform reward within it.
///
/// `money_min..=money_max` is inclusive on both ends. An empty item catalog
/// aborts the resolution; the caller surfaces the error and applies no state
/// change.
pub fn resolve(
    rng: &mut impl Rng,
    catalog: &[LootItem],
    money_min: i64,
    money_max: i64,
) -> Result<RewardOutcome, RewardError> {
    let roll = rng.gen_range(0.0..=100.0f32);
    match RewardBucket::from_roll(roll) {
        RewardBucket::Item => catalog
            .choose(rng)
            .cloned()
            .map(RewardOutcome::Item)
            .ok_or(RewardError::EmptyCatalog),
        RewardBucket::Weapon => {
            let kind = WeaponKind::ALL[rng.gen_range(0..WeaponKind::ALL.len())];
            Ok(RewardOutcome::Weapon(kind))
        }
        RewardBucket::Money => Ok(RewardOutcome::Money(rng.gen_range(money_min..=money_max))),
    }
}
