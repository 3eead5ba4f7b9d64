//! Components attached to searchable world props.
use bevy::prelude::*;

/// Marks a world prop as searchable and names the model it was spawned from.
///
/// The cache refresh matches this model name against the configured
/// descriptor list, so props of unconfigured models are ignored.
#[derive(Component, Debug, Clone)]
pub struct Lootable {
    pub model: String,
}

impl Lootable {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

/// Map blip attached to a searchable prop, styled once at creation.
#[derive(Component, Debug, Clone)]
pub struct LootBlip {
    pub label: String,
    pub color: Color,
}

impl LootBlip {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Exempts a prop from streaming despawn while it cools down after a search.
///
/// Inserted together with the cooldown entry and removed in the same pass
/// that prunes it, so a looted prop cannot be unloaded mid-cooldown.
#[derive(Component, Debug, Default)]
pub struct KeepLoaded;
