//! Game state transition event and observer.
//!
//! Systems request a transition by writing to
//! [`NextGameState`]; `check_pending_state` then fires a
//! [`GameStateChangedEvent`], and the observer here applies the change and
//! runs the exit/enter hooks registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore). Keeping
//! the hook invocation behind an event avoids borrow conflicts between the
//! requesting system and the hooks themselves.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Signals that a pending state transition should be applied now.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Hook key to run when entering `state`, if any.
fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Menu => Some("enter_menu"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Quitting => Some("quit_game"),
    }
}

/// Hook key to run when leaving `state`, if any.
///
/// Menu and Playing own scene entities, so leaving either runs the cleanup
/// system that despawns everything not marked
/// [`Persistent`](crate::components::persistent::Persistent).
fn exit_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::Menu | GameStates::Playing => Some("clean_all_entities"),
        _ => None,
    }
}

fn run_hook(commands: &mut Commands, store: &SystemsStore, key: &str) {
    match store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' system registered in SystemsStore", key),
    }
}

/// Apply a pending transition: update [`GameState`], run the old state's
/// exit hook, then the new state's enter hook, and clear the request.
///
/// A Playing -> Playing transition is a level change: cleanup runs, then
/// `enter_play` builds the next level.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("State change: {:?} -> {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            if let Some(key) = exit_hook(&old_state) {
                run_hook(&mut commands, &systems_store, key);
            }
            if let Some(key) = enter_hook(&new_state) {
                run_hook(&mut commands, &systems_store, key);
            }
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}
