//! Tracks which level file is loaded and its pixel dimensions.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Currently loaded level plus any pending transition.
///
/// Systems that want a reload or a level change set `pending` instead of
/// touching the world directly; the playing-state enter hook consumes it.
#[derive(Resource, Debug, Clone)]
pub struct LevelState {
    /// Level file name without extension, e.g. `level01`.
    pub current: String,
    /// Level size in pixels, from the level file header.
    pub size: Vector2,
    /// Level to load on the next playing-state enter, if different.
    pub pending: Option<String>,
}

impl LevelState {
    pub fn new(current: &str) -> Self {
        Self {
            current: current.to_string(),
            size: Vector2 { x: 0.0, y: 0.0 },
            pending: None,
        }
    }

    /// Queue a restart of the current level.
    pub fn request_restart(&mut self) {
        self.pending = Some(self.current.clone());
    }

    /// Queue a different level.
    pub fn request_level(&mut self, name: &str) {
        self.pending = Some(name.to_string());
    }

    /// Take the queued level, making it current.
    pub fn take_pending(&mut self) -> String {
        if let Some(next) = self.pending.take() {
            self.current = next;
        }
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_pending_promotes_requested_level() {
        let mut state = LevelState::new("level01");
        state.request_level("level02");
        assert_eq!(state.take_pending(), "level02");
        assert_eq!(state.current, "level02");
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_take_pending_without_request_keeps_current() {
        let mut state = LevelState::new("level01");
        assert_eq!(state.take_pending(), "level01");
    }
}
