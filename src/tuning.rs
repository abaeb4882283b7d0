//! Gameplay tuning constants.
//!
//! Everything that shapes how the game feels lives here, so balancing does
//! not require hunting through systems.

/// Side length in pixels of the square used to sample the player against
/// level zones (center, edge midpoints, corners).
pub const PLAYER_SIZE: f32 = 24.0;

/// Radius of the player's physics ball collider.
pub const PLAYER_RADIUS: f32 = 12.0;

/// Volume lost per second per active leak.
pub const BUBBLE_VOLUME_LOSS_FACTOR: f32 = 0.1;

/// Scale applied to the sum of inverted leak directions to get the thrust
/// force on the physics body.
pub const BUBBLE_BLOWOUT_FORCE: f32 = 9000.0;

/// Velocity multiplier applied every tick while bubbled.
pub const BUBBLE_DAMPENING: f32 = 0.985;

/// Maximum distance between two unit vectors for a patch to match a leak.
pub const PATCH_TOLERANCE: f32 = 0.25;

/// Patch inventory cap.
pub const PATCH_MAX: u32 = 20;

/// Patches granted by a patch pickup.
pub const PATCH_PICKUP_COUNT: u32 = 3;

/// Seconds after a puncture during which further puncture input is ignored.
pub const PUNCTURE_DEAD_TIME: f32 = 0.2;

/// Seconds a stab animation stays on screen before the bubble frame returns.
pub const STAB_ANIM_COOLDOWN: f32 = 0.4;

/// Seconds spent unbubbled and stationary before the level restarts.
pub const DEATH_STILL_TIME: f32 = 3.0;

/// Speed in pixels per second under which the player counts as stationary
/// for the death timer.
pub const STILL_EPSILON: f32 = 0.5;

/// Downward fall acceleration in pixels per second squared, applied only
/// while the bubble is burst. The world itself has no gravity, so an intact
/// bubble hovers.
pub const GRAVITY: f32 = 140.0;

/// Exhaust particles emitted per second for each active leak.
pub const EXHAUST_RATE: f32 = 24.0;
