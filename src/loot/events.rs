//! Messages exchanged between the loot engine and the rest of the game.
use std::time::Duration;

use bevy::prelude::*;

/// A qualifying prop was interacted with this tick; start a search session.
#[derive(Message, Debug, Clone, Copy)]
pub struct LootTriggered {
    pub target: Entity,
}

/// The search feedback clip ran to completion.
///
/// Written by the playback step and consumed on the next tick; the writer
/// never touches session state directly.
#[derive(Message, Debug, Clone, Copy)]
pub struct FeedbackFinished;

/// One-line user-visible notification for the HUD feed.
#[derive(Message, Debug, Clone)]
pub struct LootNotification {
    pub text: String,
}

impl LootNotification {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Direction of a requested screen fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    Out,
    In,
}

/// Asks the HUD to fade the screen over the given duration.
#[derive(Message, Debug, Clone, Copy)]
pub struct ScreenFadeRequest {
    pub direction: FadeDirection,
    pub duration: Duration,
}

impl ScreenFadeRequest {
    pub fn fade_out(duration: Duration) -> Self {
        Self {
            direction: FadeDirection::Out,
            duration,
        }
    }

    pub fn fade_in(duration: Duration) -> Self {
        Self {
            direction: FadeDirection::In,
            duration,
        }
    }
}
