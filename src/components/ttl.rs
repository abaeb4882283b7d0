//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down each frame; when the remaining time
//! reaches zero the entity is despawned. Exhaust particles use this so they
//! clean up after themselves.

use bevy_ecs::prelude::Component;

/// Remaining lifetime in seconds. The countdown respects
/// [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component)]
pub struct Ttl {
    pub remaining: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
