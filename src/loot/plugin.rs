//! LootPlugin wires the search engine into the simulation tick.
use bevy::prelude::*;

use crate::{
    core::plugin::update_game_clock,
    loot::{
        cache::SpatialCache,
        config::LootConfig,
        cooldown::CooldownTracker,
        events::{FeedbackFinished, LootNotification, LootTriggered, ScreenFadeRequest},
        feedback::FeedbackPlayback,
        proximity::HelpPrompt,
        rewards::LootRng,
        session::LootSession,
        systems::{
            advance_feedback, apply_pending_release, begin_loot_session, draw_lootable_blips,
            ensure_lootable_blips, evaluate_proximity, prune_cooldowns, refresh_lootable_cache,
        },
    },
};

pub struct LootPlugin;

impl Plugin for LootPlugin {
    fn build(&self, app: &mut App) {
        let config = LootConfig::load_or_default();
        info!(
            "Loot configured: {} prop models, loot distance {:.1}, cooldown {} ms, audio {}",
            config.descriptors.len(),
            config.loot_distance,
            config.cooldown_ms,
            if config.audio_enabled { "on" } else { "off" }
        );

        app.insert_resource(config)
            .init_resource::<SpatialCache>()
            .init_resource::<CooldownTracker>()
            .init_resource::<LootSession>()
            .init_resource::<HelpPrompt>()
            .init_resource::<FeedbackPlayback>()
            .init_resource::<LootRng>()
            .add_message::<LootTriggered>()
            .add_message::<FeedbackFinished>()
            .add_message::<LootNotification>()
            .add_message::<ScreenFadeRequest>()
            .add_systems(
                Update,
                // One engine pass per tick, in a fixed order.
                (
                    refresh_lootable_cache,
                    apply_pending_release,
                    advance_feedback,
                    ensure_lootable_blips,
                    evaluate_proximity,
                    prune_cooldowns,
                    begin_loot_session,
                )
                    .chain()
                    .after(update_game_clock),
            )
            .add_systems(Update, draw_lootable_blips);
    }
}
