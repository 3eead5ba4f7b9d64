//! Per-prop cooldown tracking after a successful search.
use std::collections::HashMap;

use bevy::prelude::*;

/// Maps a searched prop to the game time at which it becomes searchable again.
///
/// Props with a live entry model "already looted, respawning" and are
/// excluded upstream from every proximity affordance and trigger. Callers
/// pair `set` with inserting the `KeepLoaded` marker and clear it for every
/// entity returned by `prune_expired`.
#[derive(Resource, Debug, Default)]
pub struct CooldownTracker {
    entries: HashMap<Entity, u64>,
}

impl CooldownTracker {
    /// Whether the prop is still cooling down at `now_ms`.
    pub fn is_on_cooldown(&self, entity: Entity, now_ms: u64) -> bool {
        self.entries
            .get(&entity)
            .is_some_and(|expiry| now_ms < *expiry)
    }

    /// Starts a cooldown ending at `now_ms + duration_ms`.
    ///
    /// Zero-duration cooldowns are not recorded. Returns whether an entry was
    /// inserted, so the caller knows to mark the prop persistent.
    pub fn set(&mut self, entity: Entity, now_ms: u64, duration_ms: u64) -> bool {
        if duration_ms == 0 {
            return false;
        }
        self.entries.insert(entity, now_ms + duration_ms);
        true
    }

    /// Drops entries that expired or whose prop no longer exists.
    ///
    /// Returns the removed entities so the caller can clear their
    /// persistence marker in the same pass.
    pub fn prune_expired<F>(&mut self, now_ms: u64, mut exists: F) -> Vec<Entity>
    where
        F: FnMut(Entity) -> bool,
    {
        let mut removed = Vec::new();
        self.entries.retain(|entity, expiry| {
            if now_ms >= *expiry || !exists(*entity) {
                removed.push(*entity);
                false
            } else {
                true
            }
        });
        removed
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(world: &mut World) -> Entity {
        world.spawn_empty().id()
    }

    #[test]
    fn cooldown_holds_until_expiry() {
        let mut world = World::new();
        let prop = entity(&mut world);

        let mut tracker = CooldownTracker::default();
        assert!(tracker.set(prop, 100, 50));

        assert!(tracker.is_on_cooldown(prop, 100));
        assert!(tracker.is_on_cooldown(prop, 149));
        assert!(!tracker.is_on_cooldown(prop, 150));
        assert!(!tracker.is_on_cooldown(prop, 151));
    }

    #[test]
    fn zero_duration_records_nothing() {
        let mut world = World::new();
        let prop = entity(&mut world);

        let mut tracker = CooldownTracker::default();
        assert!(!tracker.set(prop, 100, 0));
        assert!(tracker.is_empty());
        assert!(!tracker.is_on_cooldown(prop, 100));
    }

    #[test]
    fn prune_removes_expired_entries() {
        let mut world = World::new();
        let young = entity(&mut world);
        let old = entity(&mut world);

        let mut tracker = CooldownTracker::default();
        tracker.set(young, 0, 1_000);
        tracker.set(old, 0, 100);

        let removed = tracker.prune_expired(100, |_| true);
        assert_eq!(removed, vec![old]);
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_on_cooldown(young, 100));
    }

    #[test]
    fn prune_removes_vanished_props() {
        let mut world = World::new();
        let alive = entity(&mut world);
        let gone = entity(&mut world);

        let mut tracker = CooldownTracker::default();
        tracker.set(alive, 0, 1_000);
        tracker.set(gone, 0, 1_000);

        let removed = tracker.prune_expired(10, |entity| entity == alive);
        assert_eq!(removed, vec![gone]);
        assert!(tracker.is_on_cooldown(alive, 10));
        assert!(!tracker.is_on_cooldown(gone, 10));
    }
}
