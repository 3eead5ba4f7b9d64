// src/ui/mod.rs
//
// UI module providing screen-space HUD elements.
//
// Current features:
// - Loot HUD (help prompt, notification feed, screen fade overlay)

pub mod hud;

// Re-export the main plugin
pub use hud::UiPlugin;
