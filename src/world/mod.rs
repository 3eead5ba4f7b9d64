//! World module housing environment setup, the follow camera, and prop streaming.
pub mod components;
pub mod plugin;
pub mod streaming;
pub mod systems;

pub use plugin::WorldPlugin;
