//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive game state changes.
//! Observers and registered systems are marked with it so level teardown
//! never despawns them.

use bevy_ecs::prelude::Component;

/// Tag component for entities that persist across state changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
