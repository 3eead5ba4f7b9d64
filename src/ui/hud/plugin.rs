//! HUD plugin wiring prompt, notification, and fade systems.
use bevy::prelude::*;

use crate::ui::hud::{
    components::ScreenFadeState,
    systems::{
        expire_notifications, setup_hud, spawn_notifications, step_screen_fade, sync_help_prompt,
        update_stats_readout,
    },
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFadeState>()
            .add_systems(Startup, setup_hud)
            .add_systems(
                Update,
                (
                    sync_help_prompt,
                    spawn_notifications,
                    expire_notifications.after(spawn_notifications),
                    update_stats_readout,
                    step_screen_fade,
                ),
            );
    }
}
