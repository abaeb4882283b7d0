use bevy_ecs::prelude::Component;
use rapier2d::prelude::RigidBodyHandle;

/// Link from an entity to its rigid body in the
/// [`PhysicsWorld`](crate::resources::physics::PhysicsWorld).
///
/// The physics system copies body positions back into
/// [`MapPosition`](crate::components::mapposition::MapPosition) every frame,
/// so gameplay systems read positions from the ECS and only talk to the
/// physics world when commanding velocities or forces.
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicsBody {
    pub handle: RigidBodyHandle,
}

impl PhysicsBody {
    pub fn new(handle: RigidBodyHandle) -> Self {
        Self { handle }
    }
}
