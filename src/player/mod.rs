//! Player module - the scavenger entity, its stats, and movement.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
