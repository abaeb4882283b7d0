//! Gameplay messages exchanged between simulation systems and the HUD.
//!
//! These are buffered messages rather than observer events: the bubble and
//! zone systems write them during simulation and the HUD/audio side reads
//! them later in the same frame.

use bevy_ecs::message::Message;
use raylib::prelude::Vector2;

/// A patch was consumed sealing one or more leaks.
#[derive(Message, Debug, Clone, Copy)]
pub struct PatchConsumedMessage {
    /// Patches left in the player's inventory after consumption.
    pub remaining: u32,
    /// Number of leaks the patch sealed.
    pub sealed: usize,
}

/// The bubble ran out of air and burst.
#[derive(Message, Debug, Clone, Copy)]
pub struct BubbleBurstMessage {
    /// World position of the player at the moment of bursting.
    pub position: Vector2,
}

/// The player touched a killbox or died outside the bubble.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerDiedMessage {
    pub position: Vector2,
}
