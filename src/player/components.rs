//! Components and resources describing the player.
use std::collections::HashMap;

use bevy::prelude::*;

/// Marker component identifying the player entity.
#[derive(Component, Debug)]
pub struct Player;

/// Gameplay flags that gate movement and looting.
#[derive(Resource, Debug, Default)]
pub struct PlayerStatus {
    /// Set while a search session is in flight; suppresses movement.
    pub frozen: bool,
    /// Riding something; looting requires being on foot.
    pub mounted: bool,
}

/// Player health pool.
#[derive(Component, Debug)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}

impl Default for Health {
    fn default() -> Self {
        Self {
            current: 100.0,
            max: 100.0,
        }
    }
}

/// Player cash balance.
#[derive(Component, Debug, Default)]
pub struct Wallet {
    pub balance: i64,
}

impl Wallet {
    pub fn credit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }
}

/// Miscellaneous items the player has picked up.
#[derive(Component, Debug, Default)]
pub struct Satchel {
    items: Vec<String>,
}

impl Satchel {
    pub fn stash(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Every weapon a search can turn up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Pistol,
    MicroSmg,
    AssaultRifle,
    PumpShotgun,
    SawnOffShotgun,
    Grenade,
    BzGas,
    SmokeGrenade,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 8] = [
        WeaponKind::Pistol,
        WeaponKind::MicroSmg,
        WeaponKind::AssaultRifle,
        WeaponKind::PumpShotgun,
        WeaponKind::SawnOffShotgun,
        WeaponKind::Grenade,
        WeaponKind::BzGas,
        WeaponKind::SmokeGrenade,
    ];

    /// Rounds per magazine, used when a found weapon tops up ammo.
    pub fn magazine_size(self) -> u32 {
        match self {
            WeaponKind::Pistol => 12,
            WeaponKind::MicroSmg => 16,
            WeaponKind::AssaultRifle => 30,
            WeaponKind::PumpShotgun => 8,
            WeaponKind::SawnOffShotgun => 8,
            WeaponKind::Grenade | WeaponKind::BzGas | WeaponKind::SmokeGrenade => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WeaponKind::Pistol => "pistol",
            WeaponKind::MicroSmg => "micro SMG",
            WeaponKind::AssaultRifle => "assault rifle",
            WeaponKind::PumpShotgun => "pump shotgun",
            WeaponKind::SawnOffShotgun => "sawn-off shotgun",
            WeaponKind::Grenade => "grenade",
            WeaponKind::BzGas => "BZ gas canister",
            WeaponKind::SmokeGrenade => "smoke grenade",
        }
    }
}

/// Weapons the player owns, their ammo, and the current selection.
#[derive(Component, Debug, Default)]
pub struct WeaponLoadout {
    owned: HashMap<WeaponKind, u32>,
    selected: Option<WeaponKind>,
}

impl WeaponLoadout {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has(&self, kind: WeaponKind) -> bool {
        self.owned.contains_key(&kind)
    }

    pub fn ammo(&self, kind: WeaponKind) -> u32 {
        self.owned.get(&kind).copied().unwrap_or(0)
    }

    pub fn selected(&self) -> Option<WeaponKind> {
        self.selected
    }

    /// Picks up a found weapon: gives it if missing, selects it, and adds
    /// two full magazines to its ammo.
    pub fn collect(&mut self, kind: WeaponKind) {
        let ammo = self.owned.entry(kind).or_insert(0);
        *ammo = ammo.saturating_add(kind.magazine_size() * 2);
        self.selected = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_gives_selects_and_loads_two_magazines() {
        let mut loadout = WeaponLoadout::default();
        assert!(!loadout.has(WeaponKind::Pistol));

        loadout.collect(WeaponKind::Pistol);
        assert!(loadout.has(WeaponKind::Pistol));
        assert_eq!(loadout.selected(), Some(WeaponKind::Pistol));
        assert_eq!(loadout.ammo(WeaponKind::Pistol), 24);
    }

    #[test]
    fn collecting_again_stacks_ammo_without_duplicating() {
        let mut loadout = WeaponLoadout::default();
        loadout.collect(WeaponKind::AssaultRifle);
        loadout.collect(WeaponKind::AssaultRifle);

        assert_eq!(loadout.ammo(WeaponKind::AssaultRifle), 120);
        assert_eq!(loadout.selected(), Some(WeaponKind::AssaultRifle));
    }

    #[test]
    fn collecting_switches_selection() {
        let mut loadout = WeaponLoadout::default();
        loadout.collect(WeaponKind::Pistol);
        loadout.collect(WeaponKind::PumpShotgun);
        assert_eq!(loadout.selected(), Some(WeaponKind::PumpShotgun));
        assert!(loadout.has(WeaponKind::Pistol));
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut health = Health {
            current: 90.0,
            max: 100.0,
        };
        health.heal(25.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn wallet_credit_saturates() {
        let mut wallet = Wallet { balance: i64::MAX };
        wallet.credit(10);
        assert_eq!(wallet.balance, i64::MAX);
    }
}
