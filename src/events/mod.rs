//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gameplay`] – bubble/zone outcomes consumed by HUD and audio systems
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – logical input actions triggered from raw keyboard state
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod audio;
pub mod gameplay;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
