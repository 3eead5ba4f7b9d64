//! Streams lootable props in and out around the player.
//!
//! Placements are fixed; the prop entity only exists while the player is
//! close enough, mirroring how a streamed open world loads props. A prop
//! holding a `KeepLoaded` marker (cooling down after a search) is never
//! despawned, so its cooldown entry stays attached to a live entity.
use bevy::{
    ecs::world::FromWorld,
    math::primitives::Cuboid,
    prelude::*,
};

use crate::{
    loot::components::{KeepLoaded, Lootable},
    player::components::Player,
};

/// Distance at which a placement spawns its prop.
const STREAM_IN_DISTANCE: f32 = 60.0;
/// Distance at which a spawned prop unloads; above the spawn distance so
/// props do not flicker at the boundary.
const STREAM_OUT_DISTANCE: f32 = 70.0;

const DUMPSTER_SIZE: Vec3 = Vec3::new(1.8, 1.2, 1.0);

/// One fixed prop placement and its currently spawned entity, if any.
#[derive(Debug)]
pub struct PropPlacement {
    pub model: &'static str,
    pub position: Vec3,
    pub rotation: Quat,
    spawned: Option<Entity>,
}

impl PropPlacement {
    fn new(model: &'static str, position: Vec3, yaw: f32) -> Self {
        Self {
            model,
            position,
            rotation: Quat::from_rotation_y(yaw),
            spawned: None,
        }
    }
}

/// All prop placements in the world.
#[derive(Resource, Debug)]
pub struct PropRegistry {
    placements: Vec<PropPlacement>,
}

impl Default for PropRegistry {
    fn default() -> Self {
        use std::f32::consts::{FRAC_PI_2, PI};

        Self {
            placements: vec![
                PropPlacement::new("dumpster_01a", Vec3::new(-3.0, 0.6, -12.5), 0.0),
                PropPlacement::new("dumpster_02a", Vec3::new(4.5, 0.6, -12.5), 0.0),
                PropPlacement::new("dumpster_02b", Vec3::new(-17.0, 0.6, -2.0), FRAC_PI_2),
                PropPlacement::new("dumpster_04a", Vec3::new(19.0, 0.6, 4.0), -FRAC_PI_2),
                PropPlacement::new("dumpster_01a", Vec3::new(10.0, 0.6, 18.0), PI),
                PropPlacement::new("dumpster_04a", Vec3::new(-26.0, 0.6, 30.0), 0.3),
                PropPlacement::new("dumpster_02a", Vec3::new(44.0, 0.6, -38.0), 1.1),
                PropPlacement::new("dumpster_01a", Vec3::new(-48.0, 0.6, -44.0), 2.0),
            ],
        }
    }
}

/// Shared mesh/material handles for streamed dumpster props.
#[derive(Resource, Debug)]
pub struct PropVisuals {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl FromWorld for PropVisuals {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let mesh = meshes.add(Mesh::from(Cuboid::new(
            DUMPSTER_SIZE.x,
            DUMPSTER_SIZE.y,
            DUMPSTER_SIZE.z,
        )));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(52, 84, 58),
            perceptual_roughness: 0.7,
            metallic: 0.35,
            ..default()
        });

        Self { mesh, material }
    }
}

/// Spawns placements near the player and unloads the ones left far behind.
pub fn stream_lootable_props(
    mut registry: ResMut<PropRegistry>,
    visuals: Res<PropVisuals>,
    player: Query<&Transform, With<Player>>,
    lootables: Query<(), With<Lootable>>,
    kept: Query<(), With<KeepLoaded>>,
    mut commands: Commands,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let player_pos = player_transform.translation;

    for placement in &mut registry.placements {
        let distance = player_pos.distance(placement.position);

        match placement.spawned {
            None => {
                if distance <= STREAM_IN_DISTANCE {
                    let entity = commands
                        .spawn((
                            Mesh3d(visuals.mesh.clone()),
                            MeshMaterial3d(visuals.material.clone()),
                            Transform::from_translation(placement.position)
                                .with_rotation(placement.rotation),
                            Lootable::new(placement.model),
                            Name::new(format!("Dumpster ({})", placement.model)),
                        ))
                        .id();
                    placement.spawned = Some(entity);
                    debug!(target: "world", "streamed in {} at {distance:.1}m", placement.model);
                }
            }
            Some(entity) => {
                if !lootables.contains(entity) {
                    // Despawned elsewhere; forget the handle.
                    placement.spawned = None;
                } else if distance > STREAM_OUT_DISTANCE && !kept.contains(entity) {
                    commands.entity(entity).despawn();
                    placement.spawned = None;
                    debug!(target: "world", "streamed out {} at {distance:.1}m", placement.model);
                }
            }
        }
    }
}
