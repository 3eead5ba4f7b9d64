//! Core module housing simulation timing.
pub mod plugin;

pub use plugin::CorePlugin;
