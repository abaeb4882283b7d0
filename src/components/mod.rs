//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite animations
//! - [`bubble`] – the player's bubble: volume, leaks, patches, timers
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`hud`] – markers and layout for the patch inventory display
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive state changes
//! - [`physicsbody`] – link from an entity to its rigid body
//! - [`screenposition`] – screen-space position for HUD elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation for sprites and text
//! - [`ttl`] – countdown that despawns the entity at zero
//! - [`velocity`] – plain velocity for cosmetic entities
//! - [`waypoints`] – ping-pong waypoint sequencer for moving platforms
//! - [`zindex`] – rendering order hint for 2D drawing
//! - [`zone`] – killbox/pickup/exit rectangles and sample-point queries

pub mod animation;
pub mod bubble;
pub mod dynamictext;
pub mod hud;
pub mod mapposition;
pub mod persistent;
pub mod physicsbody;
pub mod screenposition;
pub mod sprite;
pub mod tint;
pub mod ttl;
pub mod velocity;
pub mod waypoints;
pub mod zindex;
pub mod zone;
