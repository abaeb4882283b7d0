//! Moving platform integration tests: waypoint travel, arrival snapping,
//! ping-pong return legs, and linked killbox tracking.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use bubblejet::components::mapposition::MapPosition;
use bubblejet::components::physicsbody::PhysicsBody;
use bubblejet::components::waypoints::{LinkedKillbox, Waypoint, WaypointPath};
use bubblejet::components::zone::{SpikeStyle, Zone, ZoneKind};
use bubblejet::resources::physics::PhysicsWorld;
use bubblejet::resources::worldtime::WorldTime;
use bubblejet::systems::physics::{physics_step, sync_physics_positions};
use bubblejet::systems::platform::{linked_killbox_system, platform_system};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(PhysicsWorld::new());
    world
}

/// Spawn a kinematic platform at its first waypoint.
fn spawn_platform(world: &mut World, path: WaypointPath) -> Entity {
    let start = path.start_position();
    let handle = {
        let mut physics = world.resource_mut::<PhysicsWorld>();
        physics.spawn_platform(start.x, start.y, 48.0, 8.0)
    };
    world
        .spawn((path, PhysicsBody::new(handle), MapPosition::from_vec(start)))
        .id()
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            platform_system,
            physics_step,
            sync_physics_positions,
            linked_killbox_system,
        )
            .chain(),
    );
    schedule.run(world);
}

#[test]
fn platform_travels_and_snaps_exactly_onto_waypoint() {
    let mut world = make_world(0.1);
    let path = WaypointPath::new(
        vec![Waypoint::new(0.0, 50.0, 0.0), Waypoint::new(100.0, 50.0, 0.0)],
        50.0,
        0.0,
    );
    let entity = spawn_platform(&mut world, path);

    // 100 units at 50 u/s is 2 seconds: 20 ticks of 0.1s.
    for _ in 0..20 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 100.0));
    assert!(approx_eq(pos.pos.y, 50.0));
}

#[test]
fn platform_ping_pongs_back_to_start() {
    let mut world = make_world(0.1);
    let path = WaypointPath::new(
        vec![Waypoint::new(0.0, 50.0, 0.0), Waypoint::new(100.0, 50.0, 0.0)],
        50.0,
        0.0,
    );
    let entity = spawn_platform(&mut world, path);

    // Out in 20 ticks, back in 20 more.
    for _ in 0..40 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(pos.pos.y, 50.0));
}

#[test]
fn kinematic_platform_ignores_gravity_while_waiting() {
    let mut world = make_world(0.1);
    let mut path = WaypointPath::new(
        vec![Waypoint::new(0.0, 50.0, 0.0), Waypoint::new(100.0, 50.0, 0.0)],
        50.0,
        0.0,
    );
    path.time_offset = 100.0; // hold still for the whole test
    let entity = spawn_platform(&mut world, path);

    for _ in 0..30 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(pos.pos.y, 50.0));
}

#[test]
fn waiting_platform_holds_at_destination() {
    let mut world = make_world(0.1);
    let path = WaypointPath::new(
        vec![Waypoint::new(0.0, 50.0, 0.0), Waypoint::new(50.0, 50.0, 1.0)],
        50.0,
        0.0,
    );
    let entity = spawn_platform(&mut world, path);

    // 10 ticks to arrive, then the 1 second wait pins it in place.
    for _ in 0..15 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 50.0));
}

#[test]
fn linked_killbox_rides_its_platform() {
    let mut world = make_world(0.1);
    let path = WaypointPath::new(
        vec![Waypoint::new(0.0, 50.0, 0.0), Waypoint::new(100.0, 50.0, 0.0)],
        50.0,
        0.0,
    );
    let platform = spawn_platform(&mut world, path);

    // Killbox sits 20 units above the platform's first waypoint.
    let offset = Vector2 { x: -8.0, y: -20.0 };
    let zone_size = Vector2 { x: 16.0, y: 16.0 };
    let killbox = world
        .spawn((
            LinkedKillbox {
                target: platform,
                offset,
            },
            Zone::new(
                offset,
                zone_size,
                ZoneKind::Killbox {
                    style: SpikeStyle::Up,
                },
                0,
            ),
            MapPosition::new(0.0, 0.0),
        ))
        .id();

    for _ in 0..20 {
        tick(&mut world);
    }

    let platform_pos = world.get::<MapPosition>(platform).unwrap().pos;
    let zone = world.get::<Zone>(killbox).unwrap();
    assert!(approx_eq(zone.pos.x, platform_pos.x + offset.x));
    assert!(approx_eq(zone.pos.y, platform_pos.y + offset.y));

    // Sprite pivot is re-centered on the zone rectangle.
    let killbox_pos = world.get::<MapPosition>(killbox).unwrap().pos;
    assert!(approx_eq(killbox_pos.x, zone.pos.x + zone_size.x * 0.5));
    assert!(approx_eq(killbox_pos.y, zone.pos.y + zone_size.y * 0.5));
}
