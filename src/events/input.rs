//! Input action events.
//!
//! [`InputEvent`] fires on every press or release of a bound action, letting
//! observers react without polling
//! [`InputState`](crate::resources::input::InputState) themselves. The debug
//! and fullscreen toggles bypass this and have their own paths.

use bevy_ecs::prelude::*;

/// Logical input actions, abstracted from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    StabUp,
    StabDown,
    StabLeft,
    StabRight,
    PatchUp,
    PatchDown,
    PatchLeft,
    PatchRight,
    /// Back out of a menu or abandon a run (default: Escape).
    Back,
    /// Start a dive (default: Space).
    Dive,
    /// Start a dive, alternate binding (default: Enter).
    DiveAlt,
}

/// Fired when a bound action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// True on press, false on release.
    pub pressed: bool,
}
