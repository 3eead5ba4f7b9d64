//! Search feedback clip playback model.
//!
//! Audio decoding is out of scope; the clip is modelled as a position/length
//! pair stepped by game time. Completion is reported once per run and
//! consumed by the tick loop as a buffered message, never by mutating session
//! state from here.
use std::time::Duration;

use bevy::prelude::*;

/// Length of the rummaging clip the search plays.
const CLIP_LENGTH: Duration = Duration::from_secs(5);

/// Playback state of the search feedback clip.
#[derive(Resource, Debug)]
pub struct FeedbackPlayback {
    position: Duration,
    length: Duration,
    playing: bool,
}

impl FeedbackPlayback {
    pub fn new(length: Duration) -> Self {
        Self {
            position: Duration::ZERO,
            length,
            playing: false,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Starts playback, restarting from the top only if the clip previously
    /// ran to completion; otherwise playback resumes where it stopped.
    pub fn start(&mut self) {
        if self.position >= self.length {
            self.position = Duration::ZERO;
        }
        self.playing = true;
    }

    /// Advances playback by `delta`. Returns true on the step where the clip
    /// finishes, exactly once per run.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.playing {
            return false;
        }
        self.position += delta;
        if self.position >= self.length {
            self.position = self.length;
            self.playing = false;
            return true;
        }
        false
    }
}

impl Default for FeedbackPlayback {
    fn default() -> Self {
        Self::new(CLIP_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_exactly_once_per_run() {
        let mut playback = FeedbackPlayback::new(Duration::from_millis(100));
        playback.start();

        assert!(!playback.advance(Duration::from_millis(60)));
        assert!(playback.advance(Duration::from_millis(60)));
        assert!(!playback.advance(Duration::from_millis(60)));
        assert!(!playback.is_playing());
    }

    #[test]
    fn completed_clip_restarts_from_the_top() {
        let mut playback = FeedbackPlayback::new(Duration::from_millis(100));
        playback.start();
        playback.advance(Duration::from_millis(150));
        assert_eq!(playback.position(), Duration::from_millis(100));

        playback.start();
        assert_eq!(playback.position(), Duration::ZERO);
        assert!(playback.is_playing());
    }

    #[test]
    fn interrupted_clip_resumes_mid_run() {
        let mut playback = FeedbackPlayback::new(Duration::from_millis(100));
        playback.start();
        playback.advance(Duration::from_millis(40));

        // A start while part-way through must not rewind.
        playback.start();
        assert_eq!(playback.position(), Duration::from_millis(40));
    }

    #[test]
    fn idle_playback_never_finishes() {
        let mut playback = FeedbackPlayback::new(Duration::from_millis(100));
        assert!(!playback.advance(Duration::from_millis(500)));
        assert_eq!(playback.position(), Duration::ZERO);
    }
}
