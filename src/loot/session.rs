//! Interaction session state machine for one search cycle.
use bevy::prelude::*;

/// Phases of a search interaction.
///
/// `Committing` and `Resolving` complete synchronously inside the tick that
/// triggered them (the commit includes the one deliberate blocking lead-in
/// pause); `Cooling` persists across ticks until the release fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Committing,
    Resolving,
    Cooling,
}

/// At most one search interaction in flight at a time.
///
/// The session-active guard lives here, not in the freeze flag: a second
/// trigger while any phase other than `Idle` is in flight is a no-op. The
/// release (fade-in + unfreeze) is driven by `release_pending`, set either by
/// the feedback-finished signal or immediately when audio is disabled, and
/// `take_release` hands it out exactly once per session.
#[derive(Resource, Debug, Default)]
pub struct LootSession {
    phase: SessionPhase,
    target: Option<Entity>,
    release_pending: bool,
}

impl LootSession {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != SessionPhase::Idle
    }

    /// Starts a session for `target`. Returns false (and changes nothing)
    /// if a session is already active.
    pub fn begin(&mut self, target: Entity) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = SessionPhase::Committing;
        self.target = Some(target);
        self.release_pending = false;
        true
    }

    /// Commit finished (fade-out, freeze, lead-in pause all done).
    pub fn begin_resolving(&mut self) {
        debug_assert_eq!(self.phase, SessionPhase::Committing);
        self.phase = SessionPhase::Resolving;
    }

    /// Reward resolution finished (granted or aborted); awaiting release.
    pub fn finish_resolving(&mut self) {
        debug_assert_eq!(self.phase, SessionPhase::Resolving);
        self.phase = SessionPhase::Cooling;
    }

    /// Flags that the release step is owed. Safe to call from the
    /// feedback-finished consumer at any time; ignored while idle.
    pub fn request_release(&mut self) {
        if self.is_active() {
            self.release_pending = true;
        }
    }

    /// Consumes a pending release, returning the session's target and
    /// resetting to `Idle`. Yields `Some` at most once per session.
    pub fn take_release(&mut self) -> Option<Entity> {
        if self.phase != SessionPhase::Cooling || !self.release_pending {
            return None;
        }
        self.phase = SessionPhase::Idle;
        self.release_pending = false;
        self.target.take()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn target(&self) -> Option<Entity> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(world: &mut World) -> Entity {
        world.spawn_empty().id()
    }

    #[test]
    fn second_trigger_is_a_noop_while_active() {
        let mut world = World::new();
        let first = entity(&mut world);
        let second = entity(&mut world);

        let mut session = LootSession::default();
        assert!(session.begin(first));
        assert!(!session.begin(second));
        assert_eq!(session.target(), Some(first));

        session.begin_resolving();
        session.finish_resolving();
        assert!(!session.begin(second), "still active while cooling");
    }

    #[test]
    fn release_fires_exactly_once_with_audio_disabled() {
        let mut world = World::new();
        let prop = entity(&mut world);

        let mut session = LootSession::default();
        session.begin(prop);
        // Audio disabled: no playback-stopped signal will come, so the
        // commit step flags the release itself.
        session.request_release();
        session.begin_resolving();
        session.finish_resolving();

        assert_eq!(session.take_release(), Some(prop));
        assert_eq!(session.take_release(), None);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn release_fires_exactly_once_with_audio_enabled() {
        let mut world = World::new();
        let prop = entity(&mut world);

        let mut session = LootSession::default();
        session.begin(prop);
        session.begin_resolving();
        session.finish_resolving();

        // Clip still playing: nothing to release yet.
        assert_eq!(session.take_release(), None);

        // Playback-stopped signal arrives.
        session.request_release();
        assert_eq!(session.take_release(), Some(prop));
        assert_eq!(session.take_release(), None);
        assert!(!session.is_active());
    }

    #[test]
    fn release_request_while_idle_is_ignored() {
        let mut session = LootSession::default();
        session.request_release();
        assert_eq!(session.take_release(), None);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn release_waits_for_cooling_phase() {
        let mut world = World::new();
        let prop = entity(&mut world);

        let mut session = LootSession::default();
        session.begin(prop);
        session.request_release();
        // Not yet cooling: the release must not fire mid-commit.
        assert_eq!(session.take_release(), None);

        session.begin_resolving();
        session.finish_resolving();
        assert_eq!(session.take_release(), Some(prop));
    }

    #[test]
    fn session_is_reusable_after_release() {
        let mut world = World::new();
        let first = entity(&mut world);
        let second = entity(&mut world);

        let mut session = LootSession::default();
        session.begin(first);
        session.begin_resolving();
        session.finish_resolving();
        session.request_release();
        session.take_release();

        assert!(session.begin(second));
        assert_eq!(session.target(), Some(second));
    }
}
