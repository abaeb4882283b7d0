//! Game state hooks.
//!
//! These systems are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and invoked
//! by the state observer: `setup` once at boot, `enter_menu`/`enter_play`
//! when those states begin, `clean_all_entities` when a scene ends, and
//! `quit_game` on shutdown.

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::hud::{patch_icon_pos, PatchIcon};
use crate::components::persistent::Persistent;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::level;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::fontstore::FontStore;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::levelstate::LevelState;
use crate::resources::texturestore::TextureStore;
use crate::tuning::PATCH_MAX;

/// Player sheet cell size in pixels.
const PLAYER_CELL: f32 = 48.0;

/// Load every asset and move on to the menu.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    // The camera target is the top-left corner of the view; the follow
    // system's clamping depends on a zero offset.
    let camera = Camera2D {
        target: Vector2 { x: 0.0, y: 0.0 },
        offset: Vector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: 1.0,
    };
    commands.insert_resource(Camera2DRes(camera));

    let font = rl
        .load_font(&th, "./assets/fonts/Arcade_Cabinet.ttf")
        .expect("Failed to load font 'arcade'");
    fonts.add("arcade", font);

    let mut tex_store = TextureStore::new();
    for key in [
        "title",
        "player",
        "platform",
        "wall",
        "spike_up",
        "spike_down",
        "spike_left",
        "spike_right",
        "soap",
        "patch",
        "exit",
        "particles",
    ] {
        let texture = rl
            .load_texture(&th, &format!("./assets/textures/{}.png", key))
            .unwrap_or_else(|_| panic!("load assets/textures/{}.png", key));
        tex_store.insert(key, texture);
    }
    commands.insert_resource(tex_store);

    // Player sheet layout: rows 0..=6 are bubble skins from full to nearly
    // empty, rows 7..=10 the four stab poses, row 11 the burst pose.
    let mut anim_store = AnimationStore::new();
    for bucket in 0..7usize {
        anim_store.insert(
            format!("bubble_b{}", bucket),
            AnimationResource::still("player", PLAYER_CELL, PLAYER_CELL, bucket),
        );
    }
    for (row, key) in [
        (7, "stab_up"),
        (8, "stab_down"),
        (9, "stab_left"),
        (10, "stab_right"),
    ] {
        anim_store.insert(
            key,
            AnimationResource {
                tex_key: "player".into(),
                frame_width: PLAYER_CELL,
                frame_height: PLAYER_CELL,
                row,
                frame_count: 4,
                fps: 10.0,
                looped: false,
            },
        );
    }
    anim_store.insert(
        "pop",
        AnimationResource {
            tex_key: "player".into(),
            frame_width: PLAYER_CELL,
            frame_height: PLAYER_CELL,
            row: 11,
            frame_count: 4,
            fps: 10.0,
            looped: false,
        },
    );
    commands.insert_resource(anim_store);

    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: "theme".into(),
        path: "./assets/audio/theme.xm".into(),
    });
    for fx in [
        "stab",
        "patch",
        "patch_fail",
        "pop",
        "pickup",
        "exit",
        "death",
        "confirm",
    ] {
        audio_cmd_writer.write(AudioCmd::LoadFx {
            id: fx.into(),
            path: format!("./assets/audio/{}.wav", fx),
        });
    }
    // Don't block; the audio thread will emit load messages which are polled by systems.

    next_state.set(GameStates::Menu);
    info!("Setup done, next state set to Menu");
}

/// Spawn the title screen.
pub fn enter_menu(
    mut commands: Commands,
    tex_store: Res<TextureStore>,
    screen: Res<crate::resources::screensize::ScreenSize>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let center_x = screen.w as f32 * 0.5;

    if let Some(title) = tex_store.get("title") {
        let (w, h) = (title.width as f32, title.height as f32);
        commands.spawn((
            ScreenPosition::new(center_x, screen.h as f32 * 0.3),
            Sprite::full("title", w, h),
            ZIndex(0),
        ));
    }
    commands.spawn((
        ScreenPosition::new(center_x - 110.0, screen.h as f32 * 0.62),
        DynamicText::new("PRESS SPACE TO DIVE", "arcade", 16.0, Color::WHITE),
    ));
    commands.spawn((
        ScreenPosition::new(center_x - 70.0, screen.h as f32 * 0.72),
        DynamicText::new("ESC TO QUIT", "arcade", 12.0, Color::GRAY),
    ));

    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: "theme".into(),
        looped: true,
    });
}

/// Load the pending level and build its scene.
///
/// Exclusive: level population replaces the physics world resource and
/// spawns entities directly.
pub fn enter_play(world: &mut World) {
    let name = {
        let mut level_state = world.resource_mut::<LevelState>();
        level_state.take_pending()
    };
    info!("Entering play with level '{}'", name);

    let data = match level::load_level(&name) {
        Ok(data) => data,
        Err(e) => {
            error!("{}", e);
            world.resource_mut::<NextGameState>().set(GameStates::Menu);
            return;
        }
    };
    level::populate_world(world, &data);

    // Patch inventory HUD: icons for the whole possible range, shown or
    // hidden by tint alpha.
    for index in 0..PATCH_MAX {
        let (x, y) = patch_icon_pos(index);
        world.spawn((
            PatchIcon { index },
            ScreenPosition::new(x, y),
            Sprite::full("patch", 10.0, 14.0),
            Tint::new(255, 255, 255, 0),
            ZIndex(20),
        ));
    }
}

/// Quitting is handled by the main loop watching the state; nothing owns
/// teardown work here except a log line.
pub fn quit_game(mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    audio_cmd_writer.write(AudioCmd::StopMusic { id: "theme".into() });
    info!("Quit requested");
}

/// Despawn every entity not marked [`Persistent`].
///
/// Runs when leaving Menu or Playing; observers and registered systems are
/// persistent entities and survive.
pub fn clean_all_entities(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
