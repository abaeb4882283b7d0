//! Level file loading and world population.
//!
//! Levels are JSON documents under `assets/levels/`. A file declares the
//! level size, the player start, named waypoint positions, moving platforms
//! that travel between those positions, killboxes, powerups, walls, and the
//! exit. [`load_level`] parses the file; [`populate_world`] spawns every
//! entity and builds a fresh physics world for it.
//!
//! Dangling references (a platform naming an unknown position, or naming a
//! linked killbox that does not exist) are logged and skipped rather than
//! failing the whole level.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::components::animation::Animation;
use crate::components::bubble::{Bubble, Player};
use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::sprite::Sprite;
use crate::components::waypoints::{LinkedKillbox, Waypoint, WaypointPath};
use crate::components::zindex::ZIndex;
use crate::components::zone::{PickupKind, SpikeStyle, Zone, ZoneKind};
use crate::resources::levelstate::LevelState;
use crate::resources::physics::PhysicsWorld;
use crate::tuning::{PLAYER_RADIUS, PLAYER_SIZE};

pub const LEVELS_DIR: &str = "assets/levels";

/// A named point a platform can travel to.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionDef {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Seconds the platform rests here after arriving.
    #[serde(default)]
    pub wait: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDef {
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub style: Option<String>,
    /// Travel speed in pixels per second.
    pub velocity: f32,
    /// Names of entries in `positions`, visited in ping-pong order.
    pub positions: Vec<String>,
    /// Seconds before the platform starts moving.
    #[serde(default)]
    pub timeoffset: f32,
    /// Name of a killbox welded to this platform.
    #[serde(default)]
    pub linked_killbox: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KillboxDef {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// One of `spike_up`, `spike_down`, `spike_left`, `spike_right`.
    pub style: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerupDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// One of `soap`, `patch`.
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExitDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Level loaded on exit; absent on the last level.
    #[serde(default)]
    pub next_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WallDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDef {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelData {
    pub width: f32,
    pub height: f32,
    pub player: PlayerDef,
    #[serde(default)]
    pub positions: Vec<PositionDef>,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub killboxes: Vec<KillboxDef>,
    #[serde(default)]
    pub powerups: Vec<PowerupDef>,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    pub exit: ExitDef,
}

/// Read and parse `assets/levels/<name>.json`.
pub fn load_level(name: &str) -> Result<LevelData, String> {
    let path = Path::new(LEVELS_DIR).join(format!("{}.json", name));
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read level file {:?}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse level {:?}: {}", path, e))
}

/// Spawn all entities for a loaded level and replace the physics world.
///
/// The caller is responsible for having despawned the previous level's
/// entities (the state observer does this on every Playing exit).
pub fn populate_world(world: &mut World, data: &LevelData) {
    let mut physics = PhysicsWorld::new();

    {
        let mut level = world.resource_mut::<LevelState>();
        level.size = Vector2 {
            x: data.width,
            y: data.height,
        };
    }

    // Static geometry
    for wall in &data.walls {
        physics.spawn_wall(wall.x, wall.y, wall.width, wall.height);
        world.spawn((
            MapPosition::new(wall.x + wall.width * 0.5, wall.y + wall.height * 0.5),
            Sprite::full("wall", wall.width, wall.height),
            ZIndex(0),
        ));
    }

    // Player
    let player_handle = physics.spawn_player(data.player.x, data.player.y, PLAYER_RADIUS);
    world.spawn((
        Player,
        Bubble::default(),
        PhysicsBody::new(player_handle),
        MapPosition::new(data.player.x, data.player.y),
        Sprite::sheet_cell("player", PLAYER_SIZE * 2.0, 0, 0),
        Animation::new("bubble_b0"),
        ZIndex(10),
    ));

    let positions: FxHashMap<&str, &PositionDef> = data
        .positions
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    // Platforms travel between named positions; record each spawned platform
    // so killboxes can weld to them afterwards.
    let mut platform_entities: FxHashMap<&str, (Entity, Vector2)> = FxHashMap::default();
    for platform in &data.platforms {
        let mut waypoints: Vec<Waypoint> = Vec::with_capacity(platform.positions.len());
        for pos_name in &platform.positions {
            match positions.get(pos_name.as_str()) {
                Some(def) => waypoints.push(Waypoint::new(def.x, def.y, def.wait)),
                None => warn!(
                    "Platform '{}' references unknown position '{}', skipping it",
                    platform.name, pos_name
                ),
            }
        }
        if waypoints.len() < 2 {
            warn!(
                "Platform '{}' has fewer than two resolvable positions, skipping platform",
                platform.name
            );
            continue;
        }
        let path = WaypointPath::new(waypoints, platform.velocity, platform.timeoffset);
        let start = path.start_position();
        let handle = physics.spawn_platform(start.x, start.y, platform.width, platform.height);
        let tex_key = platform.style.as_deref().unwrap_or("platform");
        let entity = world
            .spawn((
                path,
                PhysicsBody::new(handle),
                MapPosition::from_vec(start),
                Sprite::full(tex_key, platform.width, platform.height),
                ZIndex(2),
            ))
            .id();
        platform_entities.insert(platform.name.as_str(), (entity, start));
    }

    // Zones take effect in declaration order: killboxes, powerups, exit.
    let mut order: u32 = 0;

    for killbox in &data.killboxes {
        let Some(style) = SpikeStyle::from_str(&killbox.style) else {
            warn!(
                "Killbox '{}' has unknown style '{}', skipping",
                killbox.name, killbox.style
            );
            continue;
        };
        let zone_pos = Vector2 {
            x: killbox.x,
            y: killbox.y,
        };
        let zone_size = Vector2 {
            x: killbox.width,
            y: killbox.height,
        };
        let center = zone_pos + zone_size.scale_by(0.5);
        let mut builder = world.spawn((
            Zone {
                pos: zone_pos,
                size: zone_size,
                kind: ZoneKind::Killbox { style },
                order,
            },
            MapPosition::from_vec(center),
            Sprite::full(style.texture_key(), killbox.width, killbox.height),
            ZIndex(3),
        ));
        order += 1;

        // Weld to a platform if one claims this killbox by name.
        let link = data
            .platforms
            .iter()
            .find(|p| p.linked_killbox.as_deref() == Some(killbox.name.as_str()));
        if let Some(platform) = link {
            match platform_entities.get(platform.name.as_str()) {
                Some((entity, start)) => {
                    builder.insert(LinkedKillbox {
                        target: *entity,
                        offset: zone_pos - *start,
                    });
                }
                None => warn!(
                    "Killbox '{}' is linked to platform '{}' which failed to spawn",
                    killbox.name, platform.name
                ),
            }
        }
    }

    for powerup in &data.powerups {
        let Some(kind) = PickupKind::from_str(&powerup.kind) else {
            warn!("Powerup has unknown kind '{}', skipping", powerup.kind);
            continue;
        };
        let zone_pos = Vector2 {
            x: powerup.x,
            y: powerup.y,
        };
        let zone_size = Vector2 {
            x: powerup.width,
            y: powerup.height,
        };
        world.spawn((
            Zone {
                pos: zone_pos,
                size: zone_size,
                kind: ZoneKind::Pickup { kind },
                order,
            },
            MapPosition::from_vec(zone_pos + zone_size.scale_by(0.5)),
            Sprite::full(kind.texture_key(), powerup.width, powerup.height),
            ZIndex(3),
        ));
        order += 1;
    }

    let exit_pos = Vector2 {
        x: data.exit.x,
        y: data.exit.y,
    };
    let exit_size = Vector2 {
        x: data.exit.width,
        y: data.exit.height,
    };
    world.spawn((
        Zone {
            pos: exit_pos,
            size: exit_size,
            kind: ZoneKind::Exit {
                next_level: data.exit.next_level.clone(),
            },
            order,
        },
        MapPosition::from_vec(exit_pos + exit_size.scale_by(0.5)),
        Sprite::full("exit", data.exit.width, data.exit.height),
        ZIndex(1),
    ));

    world.insert_resource(physics);
    info!(
        "Level populated: {} walls, {} platforms, {} killboxes, {} powerups",
        data.walls.len(),
        data.platforms.len(),
        data.killboxes.len(),
        data.powerups.len()
    );
}
