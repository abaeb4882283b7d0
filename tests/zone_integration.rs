//! Zone and camera integration tests: killboxes, pickups, exits, declaration
//! order, and the camera follow clamp.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use bubblejet::components::bubble::{Bubble, Player};
use bubblejet::components::mapposition::MapPosition;
use bubblejet::components::zone::{PickupKind, SpikeStyle, Zone, ZoneKind};
use bubblejet::events::audio::AudioCmd;
use bubblejet::events::gameplay::PlayerDiedMessage;
use bubblejet::resources::camera2d::Camera2DRes;
use bubblejet::resources::gamestate::{GameStates, NextGameState, NextGameStates};
use bubblejet::resources::levelstate::LevelState;
use bubblejet::resources::screensize::ScreenSize;
use bubblejet::resources::worldtime::WorldTime;
use bubblejet::systems::camera::camera_follow_system;
use bubblejet::systems::zones::zone_check_system;
use bubblejet::tuning::PATCH_PICKUP_COUNT;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 1.0 / 60.0,
        time_scale: 1.0,
    });
    world.insert_resource(LevelState::new("level01"));
    world.insert_resource(NextGameState::new());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<PlayerDiedMessage>>();
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((Player, Bubble::default(), MapPosition::new(x, y)))
        .id()
}

fn killbox(pos: Vector2, size: Vector2, order: u32) -> Zone {
    Zone::new(
        pos,
        size,
        ZoneKind::Killbox {
            style: SpikeStyle::Up,
        },
        order,
    )
}

fn pickup(pos: Vector2, size: Vector2, kind: PickupKind, order: u32) -> Zone {
    Zone::new(pos, size, ZoneKind::Pickup { kind }, order)
}

fn exit(pos: Vector2, size: Vector2, next_level: Option<&str>, order: u32) -> Zone {
    Zone::new(
        pos,
        size,
        ZoneKind::Exit {
            next_level: next_level.map(str::to_string),
        },
        order,
    )
}

fn tick_zones(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(zone_check_system);
    schedule.run(world);
}

const ZONE_SIZE: Vector2 = Vector2 { x: 32.0, y: 32.0 };

#[test]
fn killbox_restarts_the_level() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    world.spawn((killbox(Vector2 { x: 90.0, y: 90.0 }, ZONE_SIZE, 0),));

    tick_zones(&mut world);

    let deaths: Vec<PlayerDiedMessage> = world
        .resource_mut::<Messages<PlayerDiedMessage>>()
        .drain()
        .collect();
    assert_eq!(deaths.len(), 1);

    let level = world.resource::<LevelState>();
    assert_eq!(level.pending.as_deref(), Some("level01"));
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Playing)
    );
}

#[test]
fn corner_sample_detects_grazing_overlap() {
    let mut world = make_world();
    // Player center is outside the zone; only the bottom-right corner of the
    // 24px bounding box (at 112, 112) reaches in.
    spawn_player(&mut world, 100.0, 100.0);
    world.spawn((killbox(Vector2 { x: 111.0, y: 111.0 }, ZONE_SIZE, 0),));

    tick_zones(&mut world);

    let deaths: Vec<PlayerDiedMessage> = world
        .resource_mut::<Messages<PlayerDiedMessage>>()
        .drain()
        .collect();
    assert_eq!(deaths.len(), 1);
}

#[test]
fn distant_zone_does_not_trigger() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    world.spawn((killbox(Vector2 { x: 200.0, y: 200.0 }, ZONE_SIZE, 0),));

    tick_zones(&mut world);

    let deaths: Vec<PlayerDiedMessage> = world
        .resource_mut::<Messages<PlayerDiedMessage>>()
        .drain()
        .collect();
    assert!(deaths.is_empty());
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );
}

#[test]
fn patch_pickup_adds_inventory_and_despawns() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100.0, 100.0);
    let zone = world
        .spawn((pickup(
            Vector2 { x: 90.0, y: 90.0 },
            ZONE_SIZE,
            PickupKind::Patch,
            0,
        ),))
        .id();

    tick_zones(&mut world);

    let bubble = world.get::<Bubble>(player).unwrap();
    assert_eq!(bubble.patches, 3 + PATCH_PICKUP_COUNT);
    assert!(world.get_entity(zone).is_err());
}

#[test]
fn soap_pickup_refills_but_leaks_stay_open() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100.0, 100.0);
    {
        let mut bubble = world.get_mut::<Bubble>(player).unwrap();
        bubble.volume = 0.2;
        bubble.puncture(Vector2 { x: 1.0, y: 0.0 });
    }
    world.spawn((pickup(
        Vector2 { x: 90.0, y: 90.0 },
        ZONE_SIZE,
        PickupKind::Soap,
        0,
    ),));

    tick_zones(&mut world);

    // Soap restores volume only; the puncture still has to be patched.
    let bubble = world.get::<Bubble>(player).unwrap();
    assert!(approx_eq(bubble.volume, 1.0));
    assert_eq!(bubble.leaks.len(), 1);
}

#[test]
fn exit_queues_the_next_level() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    world.spawn((exit(
        Vector2 { x: 90.0, y: 90.0 },
        ZONE_SIZE,
        Some("level02"),
        0,
    ),));

    tick_zones(&mut world);

    let level = world.resource::<LevelState>();
    assert_eq!(level.pending.as_deref(), Some("level02"));
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Playing)
    );
}

#[test]
fn final_exit_returns_to_the_menu() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    world.spawn((exit(Vector2 { x: 90.0, y: 90.0 }, ZONE_SIZE, None, 0),));

    tick_zones(&mut world);

    let level = world.resource::<LevelState>();
    assert!(level.pending.is_none());
    assert_eq!(
        *world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Menu)
    );
}

#[test]
fn declaration_order_decides_overlapping_zones() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    // Exit declared first; the killbox overlaps the same spot but loses.
    world.spawn((exit(
        Vector2 { x: 90.0, y: 90.0 },
        ZONE_SIZE,
        Some("level02"),
        0,
    ),));
    world.spawn((killbox(Vector2 { x: 90.0, y: 90.0 }, ZONE_SIZE, 1),));

    tick_zones(&mut world);

    let deaths: Vec<PlayerDiedMessage> = world
        .resource_mut::<Messages<PlayerDiedMessage>>()
        .drain()
        .collect();
    assert!(deaths.is_empty());
    assert_eq!(
        world.resource::<LevelState>().pending.as_deref(),
        Some("level02")
    );
}

#[test]
fn overlapping_pickups_are_both_consumed_in_one_check() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100.0, 100.0);
    let first = world
        .spawn((pickup(
            Vector2 { x: 90.0, y: 90.0 },
            ZONE_SIZE,
            PickupKind::Patch,
            0,
        ),))
        .id();
    let second = world
        .spawn((pickup(
            Vector2 { x: 92.0, y: 92.0 },
            ZONE_SIZE,
            PickupKind::Patch,
            1,
        ),))
        .id();

    tick_zones(&mut world);

    let bubble = world.get::<Bubble>(player).unwrap();
    assert_eq!(bubble.patches, 3 + 2 * PATCH_PICKUP_COUNT);
    assert!(world.get_entity(first).is_err());
    assert!(world.get_entity(second).is_err());
}

#[test]
fn pickup_does_not_shield_an_overlapping_killbox() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100.0, 100.0);
    let zone = world
        .spawn((pickup(
            Vector2 { x: 90.0, y: 90.0 },
            ZONE_SIZE,
            PickupKind::Patch,
            0,
        ),))
        .id();
    world.spawn((killbox(Vector2 { x: 92.0, y: 92.0 }, ZONE_SIZE, 1),));

    tick_zones(&mut world);

    // Both zones fire: the pickup is collected and the killbox still kills.
    let bubble = world.get::<Bubble>(player).unwrap();
    assert_eq!(bubble.patches, 3 + PATCH_PICKUP_COUNT);
    assert!(world.get_entity(zone).is_err());
    let deaths: Vec<PlayerDiedMessage> = world
        .resource_mut::<Messages<PlayerDiedMessage>>()
        .drain()
        .collect();
    assert_eq!(deaths.len(), 1);
}

// =============================================================================
// Camera Follow Tests
// =============================================================================

fn make_camera_world(level_w: f32, level_h: f32) -> World {
    let mut world = make_world();
    world.resource_mut::<LevelState>().size = Vector2 {
        x: level_w,
        y: level_h,
    };
    world.insert_resource(ScreenSize { w: 640, h: 360 });
    world.insert_resource(Camera2DRes(Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 1.0,
    }));
    world
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow_system);
    schedule.run(world);
}

#[test]
fn camera_centers_on_player_inside_the_level() {
    let mut world = make_camera_world(2000.0, 1000.0);
    spawn_player(&mut world, 1000.0, 500.0);

    tick_camera(&mut world);

    let camera = world.resource::<Camera2DRes>();
    assert!(approx_eq(camera.0.target.x, 1000.0 - 320.0));
    assert!(approx_eq(camera.0.target.y, 500.0 - 180.0));
}

#[test]
fn camera_clamps_at_level_edges() {
    let mut world = make_camera_world(2000.0, 1000.0);
    let player = spawn_player(&mut world, 10.0, 10.0);

    tick_camera(&mut world);
    {
        let camera = world.resource::<Camera2DRes>();
        assert!(approx_eq(camera.0.target.x, 0.0));
        assert!(approx_eq(camera.0.target.y, 0.0));
    }

    world.get_mut::<MapPosition>(player).unwrap().pos = Vector2 { x: 1990.0, y: 990.0 };
    tick_camera(&mut world);
    let camera = world.resource::<Camera2DRes>();
    assert!(approx_eq(camera.0.target.x, 2000.0 - 640.0));
    assert!(approx_eq(camera.0.target.y, 1000.0 - 360.0));
}

#[test]
fn camera_pins_to_origin_for_small_levels() {
    let mut world = make_camera_world(320.0, 180.0);
    spawn_player(&mut world, 300.0, 170.0);

    tick_camera(&mut world);

    let camera = world.resource::<Camera2DRes>();
    assert!(approx_eq(camera.0.target.x, 0.0));
    assert!(approx_eq(camera.0.target.y, 0.0));
}
