//! High-level game state resources.
//!
//! [`GameState`] is the authoritative current state; [`NextGameState`] holds
//! a requested transition until the observer in
//! `crate::events::gamestate` applies it and runs the enter/exit hooks.

use bevy_ecs::prelude::Resource;

/// The screens the game moves between.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Menu,
    Playing,
    Quitting,
}

/// A transition request, or the lack of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state. Starts at [`GameStates::None`].
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Set the state directly. Transitions that need enter/exit hooks go
    /// through [`NextGameState`] instead.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Holds at most one pending transition request.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition. `check_pending_state` notices it on the next
    /// frame and fires the change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_at_none() {
        let state = GameState::new();
        assert_eq!(*state.get(), GameStates::None);
    }

    #[test]
    fn test_request_and_reset() {
        let mut next = NextGameState::new();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
        next.set(GameStates::Menu);
        assert_eq!(*next.get(), NextGameStates::Pending(GameStates::Menu));
        next.reset();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
    }
}
