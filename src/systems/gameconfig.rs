//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies settings to the window,
//! render target, and screen size resources.

use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::ffi;

/// Apply [`GameConfig`] changes to the window and render target.
///
/// Runs on every frame but only acts when change detection reports the
/// config was added or modified (startup, the fullscreen key, or future
/// settings UI).
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    mut screen_size: ResMut<ScreenSize>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() && !config.is_added() {
        return;
    }

    if render_target.width != config.render_width || render_target.height != config.render_height {
        info!(
            "Render target {}x{} -> {}x{}",
            render_target.width, render_target.height, config.render_width, config.render_height
        );
        match render_target.recreate(&mut rl, &th, config.render_width, config.render_height) {
            Ok(()) => {
                screen_size.w = config.render_width as i32;
                screen_size.h = config.render_height as i32;
            }
            Err(e) => warn!("Could not resize render target: {}", e),
        }
    }

    if config.fullscreen != rl.is_window_fullscreen() {
        info!("Toggling fullscreen to {}", config.fullscreen);
        rl.toggle_fullscreen();
    }

    // Raylib exposes vsync only through window state flags.
    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);
}
