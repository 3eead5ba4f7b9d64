//! Proximity affordance evaluation for cached props.
use bevy::prelude::*;

use crate::loot::{
    cache::CachedLootable,
    config::LootConfig,
    cooldown::CooldownTracker,
};

/// Local offset projected in front of a prop; the point the player actually
/// searches from, one unit out along the prop's facing.
const FRONT_OFFSET: Vec3 = Vec3::NEG_Z;

/// World-space point one unit in front of the prop.
pub fn front_point(position: Vec3, rotation: Quat) -> Vec3 {
    position + rotation * FRONT_OFFSET
}

/// Result of one tick's walk over the cached props.
#[derive(Debug, Default, Clone)]
pub struct ProximityScan {
    /// Front points to draw a search marker at this frame.
    pub marker_points: Vec<Vec3>,
    /// Whether any prop qualified for looting this tick.
    pub any_in_range: bool,
    /// First prop (in cache order) that qualified; the trigger target.
    pub first_in_range: Option<Entity>,
}

/// Walks the cached props and decides this tick's affordances.
///
/// Props on cooldown are skipped entirely: no marker, no qualification, no
/// trigger. Markers only need marker distance to the prop itself; looting
/// requires the player on foot within loot distance of the front point. The
/// first qualifying prop in cache order wins the trigger slot.
pub fn scan_objects(
    objects: &[CachedLootable],
    cooldowns: &CooldownTracker,
    now_ms: u64,
    player_pos: Vec3,
    on_foot: bool,
    config: &LootConfig,
) -> ProximityScan {
    let mut scan = ProximityScan::default();

    for object in objects {
        if cooldowns.is_on_cooldown(object.entity, now_ms) {
            continue;
        }

        let front = front_point(object.position, object.rotation);

        if config.markers_enabled && player_pos.distance(object.position) <= config.marker_distance
        {
            scan.marker_points.push(front);
        }

        if on_foot && player_pos.distance(front) <= config.loot_distance {
            scan.any_in_range = true;
            if scan.first_in_range.is_none() {
                scan.first_in_range = Some(object.entity);
            }
        }
    }

    scan
}

/// Change requested by [`HelpPrompt::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChange {
    Show,
    Dismiss,
}

/// Tracks whether the loot help prompt is currently showing.
///
/// Shown on the first qualifying tick of a visibility window and dismissed on
/// the first tick with zero qualifying props, so the HUD is never asked to
/// redraw or re-hide a prompt it already handled.
#[derive(Resource, Debug, Default)]
pub struct HelpPrompt {
    showing: bool,
}

impl HelpPrompt {
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Feeds this tick's "any prop qualified" flag and reports the required
    /// transition, if any.
    pub fn observe(&mut self, any_in_range: bool) -> Option<PromptChange> {
        match (self.showing, any_in_range) {
            (false, true) => {
                self.showing = true;
                Some(PromptChange::Show)
            }
            (true, false) => {
                self.showing = false;
                Some(PromptChange::Dismiss)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loot::cache::CachedLootable;

    fn test_config() -> LootConfig {
        let mut config = LootConfig::load_or_default();
        config.markers_enabled = true;
        config.marker_distance = 25.0;
        config.loot_distance = 1.5;
        config
    }

    fn object_at(world: &mut World, position: Vec3) -> CachedLootable {
        CachedLootable {
            entity: world.spawn_empty().id(),
            position,
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn front_point_follows_facing() {
        let position = Vec3::new(4.0, 0.0, 4.0);
        assert_eq!(
            front_point(position, Quat::IDENTITY),
            position + Vec3::NEG_Z
        );

        let turned = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let front = front_point(position, turned);
        assert!((front - (position + Vec3::NEG_X)).length() < 1e-5);
    }

    #[test]
    fn cooled_down_prop_shows_no_affordance_at_any_distance() {
        let mut world = World::new();
        let object = object_at(&mut world, Vec3::ZERO);
        let mut cooldowns = CooldownTracker::default();
        cooldowns.set(object.entity, 0, 10_000);

        // Player standing right on the front point.
        let player = front_point(object.position, object.rotation);
        let scan = scan_objects(&[object], &cooldowns, 100, player, true, &test_config());

        assert!(scan.marker_points.is_empty());
        assert!(!scan.any_in_range);
        assert!(scan.first_in_range.is_none());
    }

    #[test]
    fn first_qualifying_object_wins() {
        let mut world = World::new();
        let near = object_at(&mut world, Vec3::new(0.0, 0.0, 1.0));
        let also_near = object_at(&mut world, Vec3::new(0.0, 0.0, 1.2));
        let cooldowns = CooldownTracker::default();

        let scan = scan_objects(
            &[near, also_near],
            &cooldowns,
            0,
            Vec3::ZERO,
            true,
            &test_config(),
        );

        assert!(scan.any_in_range);
        assert_eq!(scan.first_in_range, Some(near.entity));
        assert_eq!(scan.marker_points.len(), 2);
    }

    #[test]
    fn mounted_player_gets_markers_but_cannot_loot() {
        let mut world = World::new();
        let object = object_at(&mut world, Vec3::new(0.0, 0.0, 1.0));
        let cooldowns = CooldownTracker::default();

        let scan = scan_objects(&[object], &cooldowns, 0, Vec3::ZERO, false, &test_config());

        assert_eq!(scan.marker_points.len(), 1);
        assert!(!scan.any_in_range);
        assert!(scan.first_in_range.is_none());
    }

    #[test]
    fn distant_player_sees_nothing() {
        let mut world = World::new();
        let object = object_at(&mut world, Vec3::new(100.0, 0.0, 0.0));
        let cooldowns = CooldownTracker::default();

        let scan = scan_objects(&[object], &cooldowns, 0, Vec3::ZERO, true, &test_config());

        assert!(scan.marker_points.is_empty());
        assert!(!scan.any_in_range);
    }

    #[test]
    fn prompt_shows_once_and_dismisses_once() {
        let mut prompt = HelpPrompt::default();

        assert_eq!(prompt.observe(true), Some(PromptChange::Show));
        assert_eq!(prompt.observe(true), None);
        assert_eq!(prompt.observe(true), None);
        assert!(prompt.is_showing());

        assert_eq!(prompt.observe(false), Some(PromptChange::Dismiss));
        assert_eq!(prompt.observe(false), None);
        assert!(!prompt.is_showing());
    }

    #[test]
    fn prompt_never_shown_stays_silent() {
        let mut prompt = HelpPrompt::default();
        assert_eq!(prompt.observe(false), None);
        assert_eq!(prompt.observe(false), None);
    }
}
