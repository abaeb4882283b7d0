//! Moving platform systems.
//!
//! [`platform_system`] ticks every platform's
//! [`WaypointPath`](crate::components::waypoints::WaypointPath) and commands
//! the matching kinematic body. On arrival the body is snapped to the exact
//! waypoint so floating point drift never accumulates across legs.
//!
//! [`linked_killbox_system`] keeps hazard zones welded to their platform at
//! the offset captured when the level was loaded.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::waypoints::{LinkedKillbox, WaypointPath};
use crate::components::zone::Zone;
use crate::resources::physics::PhysicsWorld;
use crate::resources::worldtime::WorldTime;

pub fn platform_system(
    mut physics: ResMut<PhysicsWorld>,
    time: Res<WorldTime>,
    mut platforms: Query<(&mut WaypointPath, &PhysicsBody)>,
) {
    for (mut path, body) in platforms.iter_mut() {
        let step = path.tick(time.delta);
        physics.set_velocity(body.handle, step.velocity);
        if let Some(arrival) = step.arrived_at {
            physics.set_position(body.handle, arrival);
        }
    }
}

/// Reposition linked killbox zones after their platforms have moved.
///
/// Runs after [`sync_physics_positions`](crate::systems::physics::sync_physics_positions)
/// so the platform's `MapPosition` is current for this frame.
pub fn linked_killbox_system(
    platforms: Query<&MapPosition, With<WaypointPath>>,
    mut killboxes: Query<(&LinkedKillbox, &mut Zone, &mut MapPosition), Without<WaypointPath>>,
) {
    for (link, mut zone, mut position) in killboxes.iter_mut() {
        let Ok(platform_pos) = platforms.get(link.target) else {
            continue;
        };
        zone.pos = platform_pos.pos + link.offset;
        // Sprite pivot sits at the zone center.
        position.pos = zone.pos + zone.size.scale_by(0.5);
    }
}
