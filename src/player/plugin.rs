//! Player plugin wiring spawn and movement systems.
use bevy::prelude::*;

use crate::player::{
    components::PlayerStatus,
    systems::{move_player, spawn_player, toggle_mount},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerStatus>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (toggle_mount, move_player.after(toggle_mount)));
    }
}
