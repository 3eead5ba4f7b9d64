//! Loot HUD: help prompt, notification feed, and the screen fade overlay.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
