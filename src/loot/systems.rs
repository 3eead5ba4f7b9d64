//! Tick systems driving the loot engine.
use bevy::prelude::*;

use crate::{
    core::plugin::GameClock,
    loot::{
        cache::{CachedLootable, SpatialCache},
        components::{KeepLoaded, LootBlip, Lootable},
        config::LootConfig,
        cooldown::CooldownTracker,
        events::{FeedbackFinished, LootNotification, LootTriggered, ScreenFadeRequest},
        feedback::FeedbackPlayback,
        proximity::{scan_objects, HelpPrompt, PromptChange},
        rewards::{resolve, LootRng, RewardError, RewardOutcome},
        session::LootSession,
    },
    player::components::{Health, Player, PlayerStatus, Satchel, Wallet, WeaponLoadout},
};

/// Logical "search the prop" action.
pub const INTERACT_KEY: KeyCode = KeyCode::KeyE;

const BLIP_LABEL: &str = "Dumpster";
const MARKER_RADIUS: f32 = 0.35;

/// Refreshes the candidate snapshot when its deadline passes.
pub fn refresh_lootable_cache(
    clock: Res<GameClock>,
    config: Res<LootConfig>,
    mut cache: ResMut<SpatialCache>,
    lootables: Query<(Entity, &Transform, &Lootable)>,
) {
    let refreshed = cache.refresh(clock.game_time_ms(), || {
        lootables
            .iter()
            .filter(|(_, _, lootable)| {
                config
                    .descriptors
                    .iter()
                    .any(|descriptor| descriptor == &lootable.model)
            })
            .map(|(entity, transform, _)| CachedLootable {
                entity,
                position: transform.translation,
                rotation: transform.rotation,
            })
            .collect()
    });

    if refreshed {
        debug!(target: "loot", "cache refreshed: {} candidates", cache.objects().len());
    }
}

/// Consumes the feedback-finished signal and performs the pending release.
///
/// The release (fade-in + unfreeze) runs exactly once per session, whether it
/// was owed by the playback-stopped signal or flagged immediately because
/// audio is disabled.
pub fn apply_pending_release(
    mut finished: MessageReader<FeedbackFinished>,
    mut session: ResMut<LootSession>,
    mut status: ResMut<PlayerStatus>,
    config: Res<LootConfig>,
    mut fades: MessageWriter<ScreenFadeRequest>,
) {
    for _ in finished.read() {
        session.request_release();
    }

    if let Some(target) = session.take_release() {
        fades.write(ScreenFadeRequest::fade_in(config.fade));
        status.frozen = false;
        info!(target: "loot", "search of {target:?} finished, player released");
    }
}

/// Steps the feedback clip and reports its completion.
pub fn advance_feedback(
    clock: Res<GameClock>,
    mut playback: ResMut<FeedbackPlayback>,
    mut finished: MessageWriter<FeedbackFinished>,
) {
    if playback.advance(clock.last_scaled_delta()) {
        finished.write(FeedbackFinished);
    }
}

/// Keeps blips attached to cached props that are allowed to show one.
///
/// A prop on cooldown must show no affordance at all, so its blip is removed
/// for the duration and recreated once the cooldown is pruned.
pub fn ensure_lootable_blips(
    clock: Res<GameClock>,
    config: Res<LootConfig>,
    cache: Res<SpatialCache>,
    cooldowns: Res<CooldownTracker>,
    blipped: Query<(), With<LootBlip>>,
    mut commands: Commands,
) {
    if !config.blips_enabled {
        return;
    }

    let now = clock.game_time_ms();
    for object in cache.objects() {
        let cooling = cooldowns.is_on_cooldown(object.entity, now);
        let has_blip = blipped.contains(object.entity);

        if cooling && has_blip {
            if let Ok(mut prop) = commands.get_entity(object.entity) {
                prop.remove::<LootBlip>();
            }
        } else if !cooling && !has_blip {
            // The snapshot may outlive the prop; skip vanished entities.
            if let Ok(mut prop) = commands.get_entity(object.entity) {
                let blip = LootBlip::new(BLIP_LABEL, config.blip_color);
                debug!(target: "loot", "blip '{}' attached to {:?}", blip.label, object.entity);
                prop.insert(blip);
            }
        }
    }
}

/// Draws every live blip as a floating diamond over its prop.
pub fn draw_lootable_blips(mut gizmos: Gizmos, blips: Query<(&Transform, &LootBlip)>) {
    for (transform, blip) in &blips {
        let top = transform.translation + Vec3::Y * 2.6;
        let bottom = transform.translation + Vec3::Y * 2.0;
        let mid = transform.translation + Vec3::Y * 2.3;
        for offset in [
            Vec3::X * 0.3,
            Vec3::NEG_X * 0.3,
            Vec3::Z * 0.3,
            Vec3::NEG_Z * 0.3,
        ] {
            gizmos.line(top, mid + offset, blip.color);
            gizmos.line(bottom, mid + offset, blip.color);
        }
    }
}

/// Evaluates proximity affordances and hands off a qualifying trigger.
pub fn evaluate_proximity(
    clock: Res<GameClock>,
    config: Res<LootConfig>,
    cache: Res<SpatialCache>,
    cooldowns: Res<CooldownTracker>,
    session: Res<LootSession>,
    status: Res<PlayerStatus>,
    keyboard: Res<ButtonInput<KeyCode>>,
    player: Query<&Transform, With<Player>>,
    mut prompt: ResMut<HelpPrompt>,
    mut gizmos: Gizmos,
    mut triggers: MessageWriter<LootTriggered>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    let scan = scan_objects(
        cache.objects(),
        &cooldowns,
        clock.game_time_ms(),
        player_transform.translation,
        !status.mounted,
        &config,
    );

    for point in &scan.marker_points {
        draw_search_marker(&mut gizmos, *point);
    }

    if scan.any_in_range != prompt.is_showing() {
        match prompt.observe(scan.any_in_range) {
            Some(PromptChange::Show) => debug!(target: "loot", "help prompt shown"),
            Some(PromptChange::Dismiss) => debug!(target: "loot", "help prompt dismissed"),
            None => {}
        }
    }

    // Explicit session-active guard: the freeze alone must never be what
    // stops a second session from starting.
    if session.is_active() {
        return;
    }

    if keyboard.just_pressed(INTERACT_KEY) {
        if let Some(target) = scan.first_in_range {
            triggers.write(LootTriggered { target });
        }
    }
}

/// Drops expired cooldowns and cooldowns of vanished props, clearing their
/// persistence marker in the same pass.
pub fn prune_cooldowns(
    clock: Res<GameClock>,
    mut cooldowns: ResMut<CooldownTracker>,
    lootables: Query<(), With<Lootable>>,
    mut commands: Commands,
) {
    let removed = cooldowns.prune_expired(clock.game_time_ms(), |entity| {
        lootables.contains(entity)
    });

    for entity in removed {
        if let Ok(mut prop) = commands.get_entity(entity) {
            prop.remove::<KeepLoaded>();
        }
        debug!(target: "loot", "cooldown cleared for {entity:?}");
    }
}

/// Runs one full search interaction: freeze, lead-in pause, feedback, reward.
pub fn begin_loot_session(
    mut triggers: MessageReader<LootTriggered>,
    clock: Res<GameClock>,
    config: Res<LootConfig>,
    mut session: ResMut<LootSession>,
    mut status: ResMut<PlayerStatus>,
    mut cooldowns: ResMut<CooldownTracker>,
    mut playback: ResMut<FeedbackPlayback>,
    mut rng: ResMut<LootRng>,
    mut player: Query<(&mut Health, &mut Wallet, &mut WeaponLoadout, &mut Satchel), With<Player>>,
    mut fades: MessageWriter<ScreenFadeRequest>,
    mut notices: MessageWriter<LootNotification>,
    mut commands: Commands,
) {
    // Honor only the first trigger; drain the rest so a stale message cannot
    // start a second session next frame.
    let mut first = None;
    for trigger in triggers.read() {
        first.get_or_insert(trigger.target);
    }
    let Some(target) = first else {
        return;
    };

    if !session.begin(target) {
        debug!(target: "loot", "search already in progress, trigger ignored");
        return;
    }
    info!(target: "loot", "searching prop {target:?}");

    fades.write(ScreenFadeRequest::fade_out(config.fade));
    status.frozen = true;

    // The one deliberate blocking step in the engine: a bounded lead-in pause
    // that lines the reward up with the rummaging feedback. The screen is
    // faded out and the player frozen for the whole window.
    std::thread::sleep(config.search_delay);

    session.begin_resolving();
    if config.audio_enabled {
        playback.start();
    } else {
        // No playback-stopped signal will arrive; the release is owed now.
        session.request_release();
    }

    match resolve(&mut rng.0, &config.items, config.money_min, config.money_max) {
        Ok(outcome) => {
            if let Ok(stats) = player.single_mut() {
                apply_outcome(outcome, stats, &mut notices);
            }
            session.finish_resolving();
            if cooldowns.set(target, clock.game_time_ms(), config.cooldown_ms) {
                if let Ok(mut prop) = commands.get_entity(target) {
                    prop.insert(KeepLoaded);
                }
            }
        }
        Err(RewardError::EmptyCatalog) => {
            // A configuration gap must not penalize the player: notify,
            // grant nothing, and leave the prop without a cooldown.
            warn!(target: "loot", "item catalog is empty, search aborted");
            notices.write(LootNotification::new(
                "There is nothing worth taking in there.",
            ));
            session.finish_resolving();
        }
    }
}

type PlayerStats<'a> = (
    Mut<'a, Health>,
    Mut<'a, Wallet>,
    Mut<'a, WeaponLoadout>,
    Mut<'a, Satchel>,
);

fn apply_outcome(
    outcome: RewardOutcome,
    (mut health, mut wallet, mut loadout, mut satchel): PlayerStats,
    notices: &mut MessageWriter<LootNotification>,
) {
    match outcome {
        RewardOutcome::Item(item) => {
            if item.heal > 0.0 {
                health.heal(item.heal);
            }
            notices.write(LootNotification::new(format!("You found a {}.", item.name)));
            satchel.stash(item.name);
        }
        RewardOutcome::Weapon(kind) => {
            loadout.collect(kind);
            notices.write(LootNotification::new(format!(
                "You found a {}.",
                kind.display_name()
            )));
        }
        RewardOutcome::Money(amount) => {
            wallet.credit(amount);
            notices.write(LootNotification::new(format!("You found ${amount}.")));
        }
    }
}

fn draw_search_marker(gizmos: &mut Gizmos, point: Vec3) {
    let color = Color::srgb_u8(205, 92, 92);
    let flat = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    // Markers are draw calls, not state; they vanish unless redrawn each tick.
    for ring in 0..3 {
        let lift = Vec3::Y * (0.05 + ring as f32 * 0.35);
        gizmos.circle(Isometry3d::new(point + lift, flat), MARKER_RADIUS, color);
    }
}
