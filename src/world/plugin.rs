//! WorldPlugin coordinates environment setup, the camera, and prop streaming.
use bevy::prelude::*;

use crate::world::{
    streaming::{stream_lootable_props, PropRegistry, PropVisuals},
    systems::{follow_player_camera, spawn_world_environment},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropRegistry>()
            .init_resource::<PropVisuals>()
            .add_systems(Startup, spawn_world_environment)
            .add_systems(Update, (stream_lootable_props, follow_player_camera));
    }
}
