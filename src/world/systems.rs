//! Systems for the world module.
use bevy::{
    math::primitives::{Cuboid, Plane3d},
    prelude::*,
};

use crate::{
    player::components::Player,
    world::components::{FollowCamera, PrimarySun},
};

const GROUND_SCALE: f32 = 120.0;
const CAMERA_START_POS: Vec3 = Vec3::new(0.0, 7.0, 17.0);

/// Spawns the initial scene: ground plane, sun, alley walls, and the camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(75, 75, 80),
            perceptual_roughness: 0.95,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
        Name::new("Ground"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 18_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        PrimarySun,
    ));

    // A few alley walls so the dumpsters have something to sit against.
    let wall_mesh = meshes.add(Mesh::from(Cuboid::new(14.0, 5.0, 0.6)));
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(120, 96, 80),
        perceptual_roughness: 0.9,
        ..default()
    });
    for (x, z, angle) in [
        (0.0, -14.0, 0.0),
        (-18.0, -4.0, std::f32::consts::FRAC_PI_2),
        (20.0, 6.0, std::f32::consts::FRAC_PI_2),
    ] {
        commands.spawn((
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_xyz(x, 2.5, z).with_rotation(Quat::from_rotation_y(angle)),
            Name::new("Alley Wall"),
        ));
    }

    let mut camera_transform = Transform::from_translation(CAMERA_START_POS);
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
    commands.spawn((Camera3d::default(), camera_transform, FollowCamera::default()));
}

/// Trails the camera behind the player with exponential smoothing.
pub fn follow_player_camera(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    if let Ok((follow, mut camera_transform)) = camera.single_mut() {
        let target = player_transform.translation + follow.offset;
        let blend = (follow.smoothing * time.delta_secs()).clamp(0.0, 1.0);
        camera_transform.translation = camera_transform.translation.lerp(target, blend);
        camera_transform.look_at(player_transform.translation, Vec3::Y);
    }
}
