//! Player bubble systems.
//!
//! The bubble is the player's life meter and propulsion source at once.
//! Stabbing the skin opens a leak; air escaping through leaks drains volume
//! and pushes the player opposite to each leak. Patches seal leaks at the
//! cost of inventory. When the volume runs out the bubble bursts and the
//! player drops; standing still too long without a bubble is death.
//!
//! System order per frame:
//! 1. [`bubble_control_system`] turns input edges into punctures and patches
//! 2. [`bubble_simulation_system`] drains volume, applies thrust and damping
//! 3. [`bubble_visuals_system`] picks the animation for the current state
//! 4. [`exhaust_particle_system`] spawns cosmetic air streams on leaks

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::bubble::{Bubble, PatchOutcome, Player};
use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::sprite::Sprite;
use crate::components::ttl::Ttl;
use crate::components::velocity::Velocity;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::gameplay::{BubbleBurstMessage, PatchConsumedMessage, PlayerDiedMessage};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levelstate::LevelState;
use crate::resources::physics::PhysicsWorld;
use crate::resources::worldtime::WorldTime;
use crate::tuning::{
    BUBBLE_BLOWOUT_FORCE, BUBBLE_DAMPENING, DEATH_STILL_TIME, EXHAUST_RATE, PLAYER_RADIUS,
    STAB_ANIM_COOLDOWN, STILL_EPSILON,
};

const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };
const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };

/// Turn input edges into punctures (WASD) and patches (arrow keys).
pub fn bubble_control_system(
    input: Res<InputState>,
    mut players: Query<(&mut Bubble, &mut Animation), With<Player>>,
    mut audio: MessageWriter<AudioCmd>,
    mut patches: MessageWriter<PatchConsumedMessage>,
) {
    let stab: Option<(Vector2, &str)> = if input.stab_up.just_pressed {
        Some((UP, "stab_up"))
    } else if input.stab_down.just_pressed {
        Some((DOWN, "stab_down"))
    } else if input.stab_left.just_pressed {
        Some((LEFT, "stab_left"))
    } else if input.stab_right.just_pressed {
        Some((RIGHT, "stab_right"))
    } else {
        None
    };

    let patch_aim: Option<Vector2> = if input.patch_up.just_pressed {
        Some(UP)
    } else if input.patch_down.just_pressed {
        Some(DOWN)
    } else if input.patch_left.just_pressed {
        Some(LEFT)
    } else if input.patch_right.just_pressed {
        Some(RIGHT)
    } else {
        None
    };

    for (mut bubble, mut animation) in players.iter_mut() {
        if let Some((direction, anim_key)) = stab {
            if bubble.puncture(direction) {
                bubble.stab_cooldown = STAB_ANIM_COOLDOWN;
                animation.set_key(anim_key);
                audio.write(AudioCmd::PlayFx {
                    id: "stab".to_string(),
                });
            }
        }
        // Patch input is dead once the bubble has burst.
        if let Some(aim) = patch_aim.filter(|_| bubble.in_bubble()) {
            match bubble.patch(aim) {
                PatchOutcome::Applied { removed } => {
                    patches.write(PatchConsumedMessage {
                        remaining: bubble.patches,
                        sealed: removed,
                    });
                    audio.write(AudioCmd::PlayFx {
                        id: "patch".to_string(),
                    });
                }
                PatchOutcome::NoMatch | PatchOutcome::Empty => {
                    audio.write(AudioCmd::PlayFx {
                        id: "patch_fail".to_string(),
                    });
                }
            }
        }
    }
}

/// Drain volume, apply blowout thrust and damping, and track death-by-stillness.
pub fn bubble_simulation_system(
    time: Res<WorldTime>,
    mut physics: ResMut<PhysicsWorld>,
    mut players: Query<(&mut Bubble, &PhysicsBody, &MapPosition), With<Player>>,
    mut level: ResMut<LevelState>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
    mut bursts: MessageWriter<BubbleBurstMessage>,
    mut deaths: MessageWriter<PlayerDiedMessage>,
) {
    for (mut bubble, body, position) in players.iter_mut() {
        bubble.tick_timers(time.delta);

        let was_in_bubble = bubble.in_bubble();
        bubble.drain(time.delta);
        if was_in_bubble && !bubble.in_bubble() {
            bursts.write(BubbleBurstMessage {
                position: position.pos,
            });
            audio.write(AudioCmd::PlayFx {
                id: "pop".to_string(),
            });
        }

        if bubble.in_bubble() {
            let thrust = bubble.thrust().scale_by(BUBBLE_BLOWOUT_FORCE);
            physics.apply_force(body.handle, thrust);
        } else {
            // The world itself is weightless; only a burst player falls.
            physics.apply_fall_force(body.handle);
        }

        let Some(velocity) = physics.velocity(body.handle) else {
            continue;
        };

        if bubble.in_bubble() {
            // Water drag; applied once per tick like the rest of the simulation.
            physics.set_velocity(body.handle, velocity.scale_by(BUBBLE_DAMPENING));
        } else {
            // Burst and motionless means the run is over.
            if velocity.length() < STILL_EPSILON {
                bubble.still_time += time.delta;
                if bubble.still_time >= DEATH_STILL_TIME {
                    bubble.still_time = 0.0;
                    deaths.write(PlayerDiedMessage {
                        position: position.pos,
                    });
                    audio.write(AudioCmd::PlayFx {
                        id: "death".to_string(),
                    });
                    level.request_restart();
                    next_state.set(GameStates::Playing);
                }
            } else {
                bubble.still_time = 0.0;
            }
        }
    }
}

/// Pick the player animation for the current bubble state.
///
/// A stab pose holds for its cooldown; otherwise the bubble skin frame is
/// bucketed by remaining volume, or the burst pose when there is no bubble.
pub fn bubble_visuals_system(mut players: Query<(&Bubble, &mut Animation), With<Player>>) {
    for (bubble, mut animation) in players.iter_mut() {
        if bubble.stab_cooldown > 0.0 {
            continue; // keep the stab pose
        }
        if !bubble.in_bubble() {
            animation.set_key("pop");
            continue;
        }
        // b0 = full bubble .. b6 = nearly empty
        let bucket = (((1.0 - bubble.volume) * 7.0) as usize).min(6);
        animation.set_key(format!("bubble_b{}", bucket));
    }
}

/// Spawn short-lived air bubbles streaming out of each leak.
pub fn exhaust_particle_system(
    time: Res<WorldTime>,
    mut accumulator: Local<f32>,
    mut rng: Local<Rng>,
    players: Query<(&Bubble, &MapPosition), With<Player>>,
    mut commands: Commands,
) {
    *accumulator += time.delta;
    let interval = 1.0 / EXHAUST_RATE;
    if *accumulator < interval {
        return;
    }
    *accumulator -= interval;

    for (bubble, position) in players.iter() {
        if !bubble.in_bubble() {
            continue;
        }
        for leak in bubble.leaks.iter() {
            let jitter = Vector2 {
                x: random_f32_range(&mut rng, -12.0, 12.0),
                y: random_f32_range(&mut rng, -12.0, 12.0),
            };
            let speed = random_f32_range(&mut rng, 30.0, 60.0);
            commands.spawn((
                MapPosition::from_vec(position.pos + leak.scale_by(PLAYER_RADIUS)),
                Velocity::from_vec(leak.scale_by(speed) + jitter),
                Sprite::sheet_cell("particles", 4.0, rng.u32(0..4), 0),
                ZIndex(5),
                Ttl::new(random_f32_range(&mut rng, 0.3, 0.7)),
            ));
        }
    }
}

fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}
