//! Camera follow system.
//!
//! The camera tracks the player but never shows anything beyond the level:
//! its target is clamped to `[0, level_size - screen_size]` on both axes.
//! Levels smaller than the screen pin the camera to the origin.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::bubble::Player;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::levelstate::LevelState;
use crate::resources::screensize::ScreenSize;

pub fn camera_follow_system(
    players: Query<&MapPosition, With<Player>>,
    mut camera: ResMut<Camera2DRes>,
    level: Res<LevelState>,
    screen: Res<ScreenSize>,
) {
    let Ok(position) = players.single() else {
        return;
    };
    let half = Vector2 {
        x: screen.w as f32 * 0.5,
        y: screen.h as f32 * 0.5,
    };
    let max_target = Vector2 {
        x: (level.size.x - screen.w as f32).max(0.0),
        y: (level.size.y - screen.h as f32).max(0.0),
    };
    let desired = position.pos - half;
    camera.0.target = Vector2 {
        x: desired.x.clamp(0.0, max_target.x),
        y: desired.y.clamp(0.0, max_target.y),
    };
}
