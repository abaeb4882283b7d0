//! Rendering systems.
//!
//! [`render_system`] is an exclusive system that owns the whole frame: it
//! temporarily takes the Raylib handle, thread, and render target out of the
//! world, draws the world pass and the screen pass into the fixed-resolution
//! target, and finally scales the target to the window with letterboxing.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::components::zone::Zone;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Water-dark background behind every level.
const CLEAR_COLOR: Color = Color::new(14, 22, 38, 255);

/// Draw one complete frame.
///
/// The Raylib non-send resources are removed for the duration of the draw
/// scopes and reinserted before returning, so other systems never observe
/// their absence.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing in render_system");
    let th = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing in render_system");
    let mut target = world
        .remove_non_send_resource::<RenderTarget>()
        .expect("RenderTarget missing in render_system");

    // Track window resizes before computing the letterbox.
    {
        let mut window = world.resource_mut::<WindowSize>();
        window.w = rl.get_screen_width();
        window.h = rl.get_screen_height();
    }
    let window = *world.resource::<WindowSize>();
    let cam = world.resource::<Camera2DRes>().0;

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    {
        let mut dt = d.begin_texture_mode(&th, &mut target.texture);
        dt.clear_background(CLEAR_COLOR);
        {
            let mut d2 = dt.begin_mode2D(cam);
            render_pass(world, &mut d2);
        }
        screen_pass(world, &mut dt);
    }

    let dest = window.calculate_letterbox(target.width, target.height);
    d.draw_texture_pro(
        target.texture.texture(),
        target.source_rect(),
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );

    render_debug_ui(world, &mut d);

    drop(d);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(th);
    world.insert_non_send_resource(target);
}

/// Invert the camera transform for an unrotated `Camera2D`.
fn screen_to_world(point: Vector2, cam: &Camera2D) -> Vector2 {
    Vector2 {
        x: (point.x - cam.offset.x) / cam.zoom + cam.target.x,
        y: (point.y - cam.offset.y) / cam.zoom + cam.target.y,
    }
}

/// We render inside raylib's drawing scopes and query the ECS World.
/// For culling we compute the world-rect visible by the camera and do AABB
/// intersection. The camera never rotates, so the inverse transform is plain
/// arithmetic.
fn render_pass(world: &mut World, d2: &mut impl RaylibDraw) {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    // Visible world-rectangle from the screen corners.
    let tl = screen_to_world(Vector2 { x: 0.0, y: 0.0 }, &cam);
    let br = screen_to_world(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        &cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    // Collect visible sprites, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex, Color)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Tint>)>();
        q.iter(world)
            .filter_map(|(s, p, z, tint)| {
                // World-space AABB with MapPosition as the pivot.
                let min = Vector2 {
                    x: p.pos.x - s.origin.x,
                    y: p.pos.y - s.origin.y,
                };
                let max = Vector2 {
                    x: min.x + s.width,
                    y: min.y + s.height,
                };
                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if overlap {
                    let color = tint.map(|t| t.color).unwrap_or(Color::WHITE);
                    Some((s.clone(), *p, *z, color))
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, z, _)| *z);

    let textures = world.resource::<TextureStore>();

    for (sprite, pos, _z, color) in to_draw.iter() {
        if let Some(tex) = textures.get(sprite.tex_key.as_str()) {
            // Source rect selects a frame from the spritesheet; negative
            // dimensions flip the sprite on that axis.
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: if sprite.flip_h {
                    -sprite.width
                } else {
                    sprite.width
                },
                height: if sprite.flip_v {
                    -sprite.height
                } else {
                    sprite.height
                },
            };
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, *color);
        }
    }

    if world.contains_resource::<DebugMode>() {
        // Zone bounds
        let mut zones = world.query::<&Zone>();
        for zone in zones.iter(world) {
            d2.draw_rectangle_lines(
                zone.pos.x as i32,
                zone.pos.y as i32,
                zone.size.x as i32,
                zone.size.y as i32,
                Color::RED,
            );
        }
        // Small cross at every MapPosition
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            d2.draw_line(
                position.pos.x as i32 - 5,
                position.pos.y as i32,
                position.pos.x as i32 + 5,
                position.pos.y as i32,
                Color::GREEN,
            );
            d2.draw_line(
                position.pos.x as i32,
                position.pos.y as i32 - 5,
                position.pos.x as i32,
                position.pos.y as i32 + 5,
                Color::GREEN,
            );
        }
    }
}

/// Draw HUD sprites and texts in screen space, on top of the world pass.
fn screen_pass(world: &mut World, d: &mut impl RaylibDraw) {
    let mut sprites: Vec<(Sprite, ScreenPosition, i32, Color)> = {
        let mut q = world.query::<(&Sprite, &ScreenPosition, Option<&ZIndex>, Option<&Tint>)>();
        q.iter(world)
            .map(|(s, p, z, tint)| {
                let color = tint.map(|t| t.color).unwrap_or(Color::WHITE);
                (s.clone(), *p, z.map(|z| z.0).unwrap_or(0), color)
            })
            .collect()
    };
    sprites.sort_by_key(|(_, _, z, _)| *z);

    {
        let textures = world.resource::<TextureStore>();
        for (sprite, pos, _z, color) in sprites.iter() {
            if let Some(tex) = textures.get(sprite.tex_key.as_str()) {
                let src = Rectangle {
                    x: sprite.offset.x,
                    y: sprite.offset.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                let dest = Rectangle {
                    x: pos.pos.x,
                    y: pos.pos.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, *color);
            }
        }
    }

    let texts: Vec<(DynamicText, ScreenPosition, Color)> = {
        let mut q = world.query::<(&DynamicText, &ScreenPosition, Option<&Tint>)>();
        q.iter(world)
            .map(|(t, p, tint)| {
                let color = tint.map(|tint| tint.multiply(t.color)).unwrap_or(t.color);
                (t.clone(), *p, color)
            })
            .collect()
    };
    let fonts = world.non_send_resource::<FontStore>();
    for (text, pos, color) in texts.iter() {
        if let Some(font) = fonts.get(&text.font) {
            d.draw_text_ex(font, &text.content, pos.pos, text.font_size, 1.0, *color);
        } else {
            d.draw_text(
                &text.content,
                pos.pos.x as i32,
                pos.pos.y as i32,
                text.font_size as i32,
                *color,
            );
        }
    }
}

fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let debug_text = "DEBUG MODE (press F11 to toggle)";

        let fps = d.get_fps();
        let text = format!("{} | FPS: {}", debug_text, fps);
        d.draw_text(&text, 10, 10, 10, Color::WHITE);

        let entity_count = world.entities().len();
        let text = format!("Entities: {}", entity_count);
        d.draw_text(&text, 10, 30, 10, Color::WHITE);

        let cam = world.resource::<Camera2DRes>().0;
        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
            cam.target.x, cam.target.y, cam.zoom
        );
        d.draw_text(&cam_text, 10, 50, 10, Color::WHITE);
    }
}
