//! Systems for the loot HUD.
use std::time::Duration;

use bevy::prelude::*;

use crate::{
    loot::{
        events::{FadeDirection, LootNotification, ScreenFadeRequest},
        proximity::HelpPrompt,
    },
    player::components::{Health, Player, Satchel, Wallet, WeaponLoadout},
    ui::hud::components::{
        FadeOverlay, HelpPromptText, NotificationArea, NotificationLife, ScreenFadeState,
        StatsReadout,
    },
};

const HELP_PROMPT: &str = "Press E to search the dumpster.";
const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(4);

/// Spawns the static HUD scaffolding: prompt, notification column, overlay.
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(48.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..Default::default()
            },
            Visibility::Hidden,
            HelpPromptText,
            Name::new("Loot Help Prompt"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(HELP_PROMPT),
                TextFont {
                    font_size: 18.0,
                    ..Default::default()
                },
                TextColor(Color::WHITE),
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(6.0),
            ..Default::default()
        },
        NotificationArea,
        Name::new("Notification Feed"),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            padding: UiRect::all(Val::Px(6.0)),
            ..Default::default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        StatsReadout,
        Name::new("Stats Readout"),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..Default::default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        GlobalZIndex(100),
        FadeOverlay,
        Name::new("Screen Fade Overlay"),
    ));
}

/// Shows or hides the help prompt when its state flips.
pub fn sync_help_prompt(
    prompt: Res<HelpPrompt>,
    mut query: Query<&mut Visibility, With<HelpPromptText>>,
) {
    if !prompt.is_changed() {
        return;
    }
    if let Ok(mut visibility) = query.single_mut() {
        *visibility = if prompt.is_showing() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Appends incoming notifications to the feed.
pub fn spawn_notifications(
    mut notices: MessageReader<LootNotification>,
    area: Query<Entity, With<NotificationArea>>,
    mut commands: Commands,
) {
    let Ok(area) = area.single() else {
        return;
    };

    for notice in notices.read() {
        let entry = commands
            .spawn((
                Node {
                    padding: UiRect::all(Val::Px(8.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..Default::default()
                },
                BackgroundColor(Color::srgba(0.08, 0.08, 0.1, 0.9)),
                BorderColor::from(Color::srgb(0.3, 0.3, 0.32)),
                NotificationLife::new(NOTIFICATION_LIFETIME),
                Name::new("Notification"),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(notice.text.clone()),
                    TextFont {
                        font_size: 15.0,
                        ..Default::default()
                    },
                    TextColor(Color::WHITE),
                ));
            })
            .id();
        commands.entity(area).add_child(entry);
    }
}

/// Removes notification entries whose lifetime ran out.
pub fn expire_notifications(
    time: Res<Time>,
    mut entries: Query<(Entity, &mut NotificationLife)>,
    mut commands: Commands,
) {
    for (entity, mut life) in entries.iter_mut() {
        if life.timer.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn();
        }
    }
}

/// Keeps the cash/health/loadout readout current.
pub fn update_stats_readout(
    player: Query<(&Wallet, &Health, &WeaponLoadout, &Satchel), With<Player>>,
    mut readout: Query<&mut Text, With<StatsReadout>>,
) {
    let Ok((wallet, health, loadout, satchel)) = player.single() else {
        return;
    };
    let Ok(mut text) = readout.single_mut() else {
        return;
    };

    let weapon = loadout
        .selected()
        .map(|kind| format!("{} ({})", kind.display_name(), loadout.ammo(kind)))
        .unwrap_or_else(|| "unarmed".to_string());
    text.0 = format!(
        "${} | HP {:.0}/{:.0} | {} | {} items",
        wallet.balance,
        health.current,
        health.max,
        weapon,
        satchel.items().len()
    );
}

/// Applies fade requests and steps the overlay toward its target opacity.
pub fn step_screen_fade(
    mut requests: MessageReader<ScreenFadeRequest>,
    mut fade: ResMut<ScreenFadeState>,
    time: Res<Time>,
    mut overlay: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    for request in requests.read() {
        let target = match request.direction {
            FadeDirection::Out => 1.0,
            FadeDirection::In => 0.0,
        };
        fade.set_target(target, request.duration);
    }

    let alpha = fade.step(time.delta_secs());
    if let Ok(mut background) = overlay.single_mut() {
        background.0 = Color::srgba(0.0, 0.0, 0.0, alpha);
    }
}
