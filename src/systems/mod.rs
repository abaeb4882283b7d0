//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-sheet animations
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`bubble`] – puncture/patch control, volume drain, thrust, visuals
//! - [`camera`] – follow the player, clamped to the level bounds
//! - [`gameconfig`] – apply configuration changes to window and render target
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`hud`] – patch inventory icons and gameplay message pumping
//! - [`input`] – poll raw keyboard state and emit input events
//! - [`menu`] – menu confirm/quit and in-game escape handling
//! - [`movement`] – integrate plain velocities for cosmetic entities
//! - [`physics`] – step the rapier world and sync body positions
//! - [`platform`] – drive waypoint platforms and their linked killboxes
//! - [`render`] – world pass, screen pass, letterboxed presentation
//! - [`time`] – update the shared clock
//! - [`ttl`] – despawn entities whose time ran out
//! - [`zones`] – killbox/pickup/exit checks against the player
pub mod animation;
pub mod audio;
pub mod bubble;
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod menu;
pub mod movement;
pub mod physics;
pub mod platform;
pub mod render;
pub mod time;
pub mod ttl;
pub mod zones;
