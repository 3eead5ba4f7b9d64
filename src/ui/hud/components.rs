//! Components and resources for the loot HUD.
use std::time::Duration;

use bevy::prelude::*;

/// Marker for the full-screen fade overlay node.
#[derive(Component, Debug)]
pub struct FadeOverlay;

/// Marker for the "press to search" help prompt container.
#[derive(Component, Debug)]
pub struct HelpPromptText;

/// Marker for the column that collects notification entries.
#[derive(Component, Debug)]
pub struct NotificationArea;

/// Marker for the cash/health/loadout readout in the top-left corner.
#[derive(Component, Debug)]
pub struct StatsReadout;

/// Countdown until a notification entry is removed from the feed.
#[derive(Component, Debug)]
pub struct NotificationLife {
    pub timer: Timer,
}

impl NotificationLife {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            timer: Timer::new(lifetime, TimerMode::Once),
        }
    }
}

/// Current overlay opacity stepping toward a requested target.
#[derive(Resource, Debug, Default)]
pub struct ScreenFadeState {
    alpha: f32,
    target: f32,
    rate: f32,
}

impl ScreenFadeState {
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Points the fade at a new target opacity over `duration`.
    pub fn set_target(&mut self, target: f32, duration: Duration) {
        self.target = target.clamp(0.0, 1.0);
        let secs = duration.as_secs_f32();
        self.rate = if secs <= f32::EPSILON {
            f32::INFINITY
        } else {
            (self.target - self.alpha).abs() / secs
        };
    }

    /// Advances the fade and returns the new opacity.
    pub fn step(&mut self, delta_secs: f32) -> f32 {
        if !self.rate.is_finite() {
            self.alpha = self.target;
            return self.alpha;
        }
        let max_step = self.rate * delta_secs;
        if self.alpha < self.target {
            self.alpha = (self.alpha + max_step).min(self.target);
        } else {
            self.alpha = (self.alpha - max_step).max(self.target);
        }
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_target_over_duration() {
        let mut fade = ScreenFadeState::default();
        fade.set_target(1.0, Duration::from_millis(500));

        fade.step(0.25);
        assert!(fade.alpha() > 0.0 && fade.alpha() < 1.0);
        fade.step(0.5);
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn fade_never_overshoots() {
        let mut fade = ScreenFadeState::default();
        fade.set_target(1.0, Duration::from_millis(100));
        fade.step(10.0);
        assert_eq!(fade.alpha(), 1.0);

        fade.set_target(0.0, Duration::from_millis(100));
        fade.step(10.0);
        assert_eq!(fade.alpha(), 0.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let mut fade = ScreenFadeState::default();
        fade.set_target(1.0, Duration::ZERO);
        assert_eq!(fade.step(0.0), 1.0);
    }
}
