//! Simple kinematic movement for cosmetic entities.
//!
//! Exhaust particles and other decorations integrate a plain
//! [`Velocity`](crate::components::velocity::Velocity) each frame instead of
//! living in the physics world.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;
use crate::resources::worldtime::WorldTime;

pub fn movement_system(mut query: Query<(&mut MapPosition, &Velocity)>, time: Res<WorldTime>) {
    for (mut position, velocity) in query.iter_mut() {
        let delta = velocity.v.scale_by(time.delta);
        position.pos = position.pos + delta;
    }
}
