use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

/// Trigger the state change event when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: ResMut<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Run condition: gameplay systems only tick while playing.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// Run condition for menu-only systems.
pub fn state_is_menu(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Menu)
}
