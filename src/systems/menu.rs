//! Menu and game-flow input systems.

use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levelstate::LevelState;

/// Confirm starts a fresh run from the configured first level; back quits.
///
/// Runs under the `state_is_menu` condition.
pub fn menu_input_system(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut level: ResMut<LevelState>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if input.dive.just_pressed || input.dive_alt.just_pressed {
        audio.write(AudioCmd::PlayFx {
            id: "confirm".to_string(),
        });
        level.request_level(&config.start_level);
        next_state.set(GameStates::Playing);
    } else if input.back.just_pressed {
        next_state.set(GameStates::Quitting);
    }
}

/// Escape abandons the run and returns to the menu.
///
/// Runs under the `state_is_playing` condition.
pub fn playing_input_system(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.back.just_pressed {
        next_state.set(GameStates::Menu);
    }
}
