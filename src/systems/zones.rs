//! Hazard, pickup, and exit zone checks.
//!
//! Each frame the player is tested against every zone using a nine-point
//! cluster: the center, the four edge midpoints, and the four corners of the
//! player's bounding box. A zone containing any sample point has been
//! entered.
//!
//! Zones are checked in their level-file declaration order and every zone
//! the player overlaps takes effect once per check: a killbox ends the run,
//! a pickup is consumed, and the first matching exit wins the level and
//! short-circuits everything after it.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::bubble::{Bubble, Player};
use crate::components::mapposition::MapPosition;
use crate::components::zone::{sample_points, PickupKind, Zone, ZoneKind};
use crate::events::audio::AudioCmd;
use crate::events::gameplay::PlayerDiedMessage;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::levelstate::LevelState;
use crate::tuning::{PATCH_PICKUP_COUNT, PLAYER_SIZE};

pub fn zone_check_system(
    mut players: Query<(&MapPosition, &mut Bubble), With<Player>>,
    zones: Query<(Entity, &Zone)>,
    mut level: ResMut<LevelState>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
    mut deaths: MessageWriter<PlayerDiedMessage>,
    mut commands: Commands,
) {
    let Ok((position, mut bubble)) = players.single_mut() else {
        return;
    };
    let samples = sample_points(position.pos, PLAYER_SIZE);

    // Query iteration order is not declaration order; sort by the zone's
    // level-file index first.
    let mut ordered: SmallVec<[(Entity, &Zone); 32]> = zones.iter().collect();
    ordered.sort_by_key(|(_, zone)| zone.order);

    for (entity, zone) in ordered {
        if !zone.hit_by_any(&samples) {
            continue;
        }
        match &zone.kind {
            ZoneKind::Killbox { .. } => {
                deaths.write(PlayerDiedMessage {
                    position: position.pos,
                });
                audio.write(AudioCmd::PlayFx {
                    id: "death".to_string(),
                });
                level.request_restart();
                next_state.set(GameStates::Playing);
            }
            ZoneKind::Pickup { kind } => {
                match kind {
                    PickupKind::Soap => bubble.refill(),
                    PickupKind::Patch => bubble.add_patches(PATCH_PICKUP_COUNT),
                }
                audio.write(AudioCmd::PlayFx {
                    id: "pickup".to_string(),
                });
                commands.entity(entity).despawn();
            }
            ZoneKind::Exit { next_level } => {
                audio.write(AudioCmd::PlayFx {
                    id: "exit".to_string(),
                });
                match next_level {
                    Some(next) => {
                        level.request_level(next);
                        next_state.set(GameStates::Playing);
                    }
                    // Last level cleared; back to the menu.
                    None => next_state.set(GameStates::Menu),
                }
                // Only the first matching exit counts.
                break;
            }
        }
    }
}
