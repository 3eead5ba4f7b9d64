//! Systems for spawning and steering the player.
use bevy::{math::primitives::Capsule3d, prelude::*};

use crate::player::components::{Health, Player, PlayerStatus, Satchel, Wallet, WeaponLoadout};

const MOVE_SPEED: f32 = 6.0;
const SPRINT_MULTIPLIER: f32 = 1.8;
const MOUNT_KEY: KeyCode = KeyCode::KeyV;
const PLAYER_START: Vec3 = Vec3::new(0.0, 0.9, 8.0);

/// Spawns the player capsule with its stat components.
pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.35, 1.1)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(70, 100, 150),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_translation(PLAYER_START),
        Player,
        Health::default(),
        Wallet::default(),
        Satchel::default(),
        WeaponLoadout::default(),
        Name::new("Player"),
    ));
}

/// Moves the player on WASD unless a search session has them frozen.
pub fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    status: Res<PlayerStatus>,
    time: Res<Time>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    if status.frozen {
        return;
    }

    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction += Vec3::NEG_Z;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction += Vec3::Z;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction += Vec3::NEG_X;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction += Vec3::X;
    }

    if direction.length_squared() > 0.0 {
        let modifier = if keyboard.pressed(KeyCode::ShiftLeft) {
            SPRINT_MULTIPLIER
        } else {
            1.0
        };
        let direction = direction.normalize();
        transform.translation += direction * MOVE_SPEED * modifier * time.delta_secs();
        // Face the walk direction so props can be approached from the front.
        let target = transform.translation + direction;
        transform.look_at(target, Vec3::Y);
    }
}

/// Toggles riding state; looting requires being on foot.
pub fn toggle_mount(keyboard: Res<ButtonInput<KeyCode>>, mut status: ResMut<PlayerStatus>) {
    if keyboard.just_pressed(MOUNT_KEY) {
        status.mounted = !status.mounted;
        info!(
            "Player {} their ride",
            if status.mounted { "mounted" } else { "left" }
        );
    }
}
