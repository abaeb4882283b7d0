//! Per-frame keyboard input resource.
//!
//! [`InputState`] holds one [`BoolState`] per logical action the game knows
//! about. Defaults: WASD stabs the bubble, arrow keys aim patches, Space or
//! Enter starts a dive, Escape backs out. F11 toggles the debug overlay and
//! F10 fullscreen.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Key state for one logical action, refreshed every frame.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

/// Keyboard state for every action the game reads.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // WASD: puncture the bubble on that side
    pub stab_up: BoolState,
    pub stab_down: BoolState,
    pub stab_left: BoolState,
    pub stab_right: BoolState,
    // Arrow keys: aim a patch at that side
    pub patch_up: BoolState,
    pub patch_down: BoolState,
    pub patch_left: BoolState,
    pub patch_right: BoolState,
    // Menu and window controls
    pub back: BoolState,
    pub dive: BoolState,
    pub dive_alt: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            stab_up: BoolState::bound(KeyboardKey::KEY_W),
            stab_down: BoolState::bound(KeyboardKey::KEY_S),
            stab_left: BoolState::bound(KeyboardKey::KEY_A),
            stab_right: BoolState::bound(KeyboardKey::KEY_D),
            patch_up: BoolState::bound(KeyboardKey::KEY_UP),
            patch_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            patch_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            patch_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            dive: BoolState::bound(KeyboardKey::KEY_SPACE),
            dive_alt: BoolState::bound(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            fullscreen_toggle: BoolState::bound(KeyboardKey::KEY_F10),
        }
    }
}
