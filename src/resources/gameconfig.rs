//! Game configuration resource.
//!
//! Settings come from an INI file (default `./config.ini`); any key the file
//! omits keeps its built-in default, so a missing file still boots the game.
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//!
//! [game]
//! start_level = level01
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Render, window, and game settings.
///
/// The [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes)
/// system watches this resource and applies changes to the running window.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    /// Level name (without extension) loaded when a dive starts.
    pub start_level: String,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            render_width: 640,
            render_height: 360,
            window_width: 1280,
            window_height: 720,
            target_fps: 120,
            vsync: true,
            fullscreen: false,
            start_level: "level01".to_string(),
            config_path: PathBuf::from("./config.ini"),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, but reading from a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::default()
        }
    }

    /// Overlay values from the INI file onto the current settings.
    ///
    /// Keys the file does not set are left alone. Fails only when the file
    /// cannot be read or parsed at all.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let uint = |ini: &Ini, section: &str, key: &str| ini.getuint(section, key).ok().flatten();
        let flag = |ini: &Ini, section: &str, key: &str| ini.getbool(section, key).ok().flatten();

        if let Some(v) = uint(&ini, "render", "width") {
            self.render_width = v as u32;
        }
        if let Some(v) = uint(&ini, "render", "height") {
            self.render_height = v as u32;
        }
        if let Some(v) = uint(&ini, "window", "width") {
            self.window_width = v as u32;
        }
        if let Some(v) = uint(&ini, "window", "height") {
            self.window_height = v as u32;
        }
        if let Some(v) = uint(&ini, "window", "target_fps") {
            self.target_fps = v as u32;
        }
        if let Some(v) = flag(&ini, "window", "vsync") {
            self.vsync = v;
        }
        if let Some(v) = flag(&ini, "window", "fullscreen") {
            self.fullscreen = v;
        }
        if let Some(v) = ini.get("game", "start_level") {
            self.start_level = v;
        }

        info!(
            "Loaded config: render {}x{}, window {}x{}, fps={}, vsync={}, fullscreen={}, start_level={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.start_level
        );
        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.render_width, 640);
        assert_eq!(config.render_height, 360);
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.start_level, "level01");
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = GameConfig::with_path("/tmp/other.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/other.ini"));
        assert_eq!(config.render_width, 640);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // Settings stay at their defaults after a failed load.
        assert_eq!(config.start_level, "level01");
    }
}
