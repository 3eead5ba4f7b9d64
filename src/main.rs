use bevy::prelude::*;

mod core;
mod loot;
mod player;
mod ui;
mod world;

use crate::{
    core::CorePlugin, loot::LootPlugin, player::PlayerPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            WorldPlugin,
            PlayerPlugin,
            LootPlugin,
            UiPlugin, // After LootPlugin so the HUD receives the loot messages
        ))
        .run();
}
