//! Physics stepping and position sync.
//!
//! [`physics_step`] advances the rapier world by the scaled frame delta.
//! [`sync_physics_positions`] copies body translations back into
//! [`MapPosition`](crate::components::mapposition::MapPosition) so rendering
//! and zone checks see where the bodies actually are.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::resources::physics::PhysicsWorld;
use crate::resources::worldtime::WorldTime;

pub fn physics_step(mut physics: ResMut<PhysicsWorld>, time: Res<WorldTime>) {
    physics.step(time.delta);
}

pub fn sync_physics_positions(
    physics: Res<PhysicsWorld>,
    mut query: Query<(&PhysicsBody, &mut MapPosition)>,
) {
    for (body, mut position) in query.iter_mut() {
        if let Some(translation) = physics.position(body.handle) {
            position.pos = translation;
        }
    }
}
