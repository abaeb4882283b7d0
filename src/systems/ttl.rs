//! Time-to-live system.
//!
//! Exhaust particles and other short-lived entities carry a
//! [`Ttl`](crate::components::ttl::Ttl) component. This system counts it
//! down with the scaled world delta and despawns the entity when it runs
//! out, so slow motion stretches particle lifetimes along with everything
//! else.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Count down every [`Ttl`] and despawn entities whose time is up.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
