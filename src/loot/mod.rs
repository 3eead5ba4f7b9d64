//! Loot module - proximity-triggered searching of world props for random rewards.
//!
//! The engine runs once per tick in a fixed order: refresh the candidate
//! cache, release any finished interaction, advance feedback playback, keep
//! blips in sync, evaluate proximity affordances, prune expired cooldowns,
//! and finally start a new interaction on qualifying input.

pub mod cache;
pub mod components;
pub mod config;
pub mod cooldown;
pub mod events;
pub mod feedback;
pub mod plugin;
pub mod proximity;
pub mod rewards;
pub mod session;
pub mod systems;

pub use plugin::LootPlugin;
