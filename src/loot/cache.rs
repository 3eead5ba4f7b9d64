//! Spatial cache of searchable props, refreshed on a fixed interval.
use bevy::prelude::*;

/// How often the cache re-queries the world, in game-time milliseconds.
pub const REFRESH_INTERVAL_MS: u64 = 1_000;

/// Snapshot of one searchable prop taken at refresh time.
#[derive(Debug, Clone, Copy)]
pub struct CachedLootable {
    pub entity: Entity,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Last-fetched set of candidate props plus the next refresh deadline.
///
/// Between refreshes the snapshot is stale but authoritative: proximity
/// evaluation always walks the cached set and never re-queries mid-interval.
/// Props that left the world are dropped on the next refresh, not before.
#[derive(Resource, Debug, Default)]
pub struct SpatialCache {
    objects: Vec<CachedLootable>,
    next_refresh_ms: u64,
}

impl SpatialCache {
    /// Replaces the cached set if the refresh deadline has passed.
    ///
    /// `fetch` is only invoked when a refresh is due; before the deadline the
    /// call is a no-op and the existing snapshot stays untouched. Returns
    /// whether a refresh happened.
    pub fn refresh<F>(&mut self, now_ms: u64, fetch: F) -> bool
    where
        F: FnOnce() -> Vec<CachedLootable>,
    {
        if now_ms < self.next_refresh_ms {
            return false;
        }
        self.objects = fetch();
        self.next_refresh_ms = now_ms + REFRESH_INTERVAL_MS;
        true
    }

    pub fn objects(&self) -> &[CachedLootable] {
        &self.objects
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn next_refresh_ms(&self) -> u64 {
        self.next_refresh_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(world: &mut World, x: f32) -> CachedLootable {
        CachedLootable {
            entity: world.spawn_empty().id(),
            position: Vec3::new(x, 0.0, 0.0),
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn refresh_before_deadline_is_a_noop() {
        let mut world = World::new();
        let first = snapshot(&mut world, 1.0);

        let mut cache = SpatialCache::default();
        assert!(cache.refresh(0, || vec![first]));

        let mut fetched = false;
        assert!(!cache.refresh(REFRESH_INTERVAL_MS - 1, || {
            fetched = true;
            Vec::new()
        }));
        assert!(!fetched);
        assert_eq!(cache.objects().len(), 1);
    }

    #[test]
    fn refresh_replaces_and_reschedules() {
        let mut world = World::new();
        let first = snapshot(&mut world, 1.0);
        let second = snapshot(&mut world, 2.0);

        let mut cache = SpatialCache::default();
        cache.refresh(0, || vec![first]);
        assert_eq!(cache.next_refresh_ms(), REFRESH_INTERVAL_MS);

        assert!(cache.refresh(REFRESH_INTERVAL_MS, || vec![second, first]));
        assert_eq!(cache.objects().len(), 2);
        assert_eq!(cache.objects()[0].entity, second.entity);
        assert_eq!(cache.next_refresh_ms(), REFRESH_INTERVAL_MS * 2);
    }

    #[test]
    fn empty_query_result_empties_the_cache() {
        let mut world = World::new();
        let first = snapshot(&mut world, 1.0);

        let mut cache = SpatialCache::default();
        cache.refresh(0, || vec![first]);
        cache.refresh(REFRESH_INTERVAL_MS, Vec::new);
        assert!(cache.objects().is_empty());
    }
}
