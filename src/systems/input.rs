//! Input systems.
//!
//! [`update_input_state`] polls Raylib once per frame, refreshes the
//! [`InputState`](crate::resources::input::InputState) resource, and triggers
//! an [`InputEvent`] for every press or release. The debug overlay toggle
//! fires [`SwitchDebugEvent`] directly, and the fullscreen key flips
//! [`GameConfig`] so the gameconfig system applies it.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{BoolState, InputState};

/// Refresh one key binding and emit press/release events for its action.
fn poll_action(
    rl: &RaylibHandle,
    state: &mut BoolState,
    action: InputAction,
    commands: &mut Commands,
) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
    if state.just_pressed {
        commands.trigger(InputEvent {
            action,
            pressed: true,
        });
    }
    if state.just_released {
        commands.trigger(InputEvent {
            action,
            pressed: false,
        });
    }
}

/// Poll the keyboard and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<RaylibHandle>,
    mut config: ResMut<GameConfig>,
    mut commands: Commands,
) {
    let input = &mut *input;
    for (state, action) in [
        (&mut input.stab_up, InputAction::StabUp),
        (&mut input.stab_down, InputAction::StabDown),
        (&mut input.stab_left, InputAction::StabLeft),
        (&mut input.stab_right, InputAction::StabRight),
        (&mut input.patch_up, InputAction::PatchUp),
        (&mut input.patch_down, InputAction::PatchDown),
        (&mut input.patch_left, InputAction::PatchLeft),
        (&mut input.patch_right, InputAction::PatchRight),
        (&mut input.back, InputAction::Back),
        (&mut input.dive, InputAction::Dive),
        (&mut input.dive_alt, InputAction::DiveAlt),
    ] {
        poll_action(&rl, state, action, &mut commands);
    }

    // Out-of-band toggles
    input.mode_debug.active = rl.is_key_down(input.mode_debug.key_binding);
    if rl.is_key_pressed(input.mode_debug.key_binding) {
        commands.trigger(SwitchDebugEvent {});
    }
    input.fullscreen_toggle.active = rl.is_key_down(input.fullscreen_toggle.key_binding);
    if rl.is_key_pressed(input.fullscreen_toggle.key_binding) {
        // The gameconfig system notices the change and applies it.
        config.fullscreen = !config.fullscreen;
    }
}
