//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the third-person camera that trails the player.
#[derive(Component)]
pub struct FollowCamera {
    pub offset: Vec3,
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 7.0, 9.0),
            smoothing: 5.0,
        }
    }
}

/// Marker component identifying the main directional light (the "sun").
#[derive(Component, Default)]
pub struct PrimarySun;
