//! Bubblejet main entry point.
//!
//! A 2D platformer built with:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//! - **rapier2d** for rigid-body physics
//!
//! The player is a soap bubble that moves only by stabbing holes in itself:
//! escaping air thrusts the bubble in the opposite direction and drains its
//! volume. Patches seal the holes before the bubble pops.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (bubble, waypoint paths, zones, sprites)
//! - [`events`] – Event and message types (gameplay, audio, state changes)
//! - [`game`] – Asset loading and scene enter/exit hooks
//! - [`level`] – Level file schema, loading, and world population
//! - [`resources`] – ECS resources (physics world, asset stores, camera)
//! - [`systems`] – ECS systems (bubble control, platforms, zones, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize raylib window, ECS world, resources (fonts, audio, physics)
//! 2. Register state hooks and observers
//! 3. Run the main game loop:
//!    - Update input, bubble simulation, platforms, physics, zones
//!    - Render world with camera transforms into a letterboxed target
//! 4. Clean up audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod level;
mod resources;
mod systems;
mod tuning;

use crate::components::persistent::Persistent;
use crate::events::gameplay::{BubbleBurstMessage, PatchConsumedMessage, PlayerDiedMessage};
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levelstate::LevelState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::bubble::{
    bubble_control_system, bubble_simulation_system, bubble_visuals_system,
    exhaust_particle_system,
};
use crate::systems::camera::camera_follow_system;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::gamestate::{check_pending_state, state_is_menu, state_is_playing};
use crate::systems::hud::{hud_patch_feedback_system, hud_patch_system, update_gameplay_messages};
use crate::systems::input::update_input_state;
use crate::systems::menu::{menu_input_system, playing_input_system};
use crate::systems::movement::movement_system;
use crate::systems::physics::{physics_step, sync_physics_positions};
use crate::systems::platform::{linked_killbox_system, platform_system};
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;
use crate::systems::zones::zone_check_system;
use bevy_ecs::message::Messages;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Bubblejet
#[derive(Parser)]
#[command(version, about = "Bubblejet: stab your way through as a soap bubble")]
struct Cli {
    /// Path to the config file (default: config.ini in the working directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Level to start on, overriding the config file.
    #[arg(long, value_name = "NAME")]
    level: Option<String>,

    /// Start with debug overlays enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::info!("Bubblejet starting up");

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Could not load config file, using defaults: {e}");
    }

    // The menu also starts runs from config.start_level, so the CLI
    // override folds into the config rather than just the initial state.
    if let Some(level) = cli.level {
        config.start_level = level;
    }
    let start_level = config.start_level.clone();

    let window_width = config.window_width;
    let window_height = config.window_height;

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Bubblejet")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit; the menu handles quitting
    rl.set_exit_key(None);

    let render_width = config.render_width;
    let render_height = config.render_height;

    let render_target = RenderTarget::new(&mut rl, &thread, render_width, render_height)
        .expect("Failed to create render target");

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    // ScreenSize tracks the internal render resolution, WindowSize the real
    // window; render_system refreshes the latter every frame.
    world.insert_resource(ScreenSize {
        w: render_width as i32,
        h: render_height as i32,
    });
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });

    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(LevelState::new(&start_level));
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(render_target);

    // The audio thread must be up before setup queues its load commands.
    setup_audio(&mut world);

    world.insert_resource(Messages::<PatchConsumedMessage>::default());
    world.insert_resource(Messages::<BubbleBurstMessage>::default());
    world.insert_resource(Messages::<PlayerDiedMessage>::default());

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(FontStore::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));

    let mut systems_store = SystemsStore::new();
    register_hook(&mut world, &mut systems_store, "setup", game::setup);
    register_hook(&mut world, &mut systems_store, "enter_menu", game::enter_menu);
    register_hook(&mut world, &mut systems_store, "enter_play", game::enter_play);
    register_hook(&mut world, &mut systems_store, "quit_game", game::quit_game);
    register_hook(
        &mut world,
        &mut systems_store,
        "clean_all_entities",
        game::clean_all_entities,
    );
    world.insert_resource(systems_store);

    // Ensure the observers are registered before we trigger any events.
    world.flush();

    // Kick off the Setup state right away rather than waiting a frame.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});

    let mut update = Schedule::default();
    // Config changes apply before anything reads window or render state.
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state);
    update.add_systems(
        menu_input_system
            .run_if(state_is_menu)
            .after(update_input_state),
    );
    update.add_systems(
        playing_input_system
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        // gameplay order matters: forces must be applied before the physics
        // step, and zones read the post-step player position
        (
            bubble_control_system,
            bubble_simulation_system,
            platform_system,
            physics_step,
            sync_physics_positions,
            linked_killbox_system,
            zone_check_system,
            camera_follow_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(update_input_state),
    );
    update.add_systems(
        (bubble_visuals_system, exhaust_particle_system)
            .run_if(state_is_playing)
            .after(sync_physics_positions),
    );
    update.add_systems(hud_patch_system.run_if(state_is_playing));
    update.add_systems(hud_patch_feedback_system.run_if(state_is_playing));
    update.add_systems(movement_system);
    update.add_systems(ttl_system.after(movement_system));
    update.add_systems(animation);
    update.add_systems(
        // commands flow out before replies flow in
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(update_gameplay_messages.after(hud_patch_feedback_system));
    update.add_systems(check_pending_state.after(zone_check_system));
    update.add_systems(render_system.after(animation));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        // Reset change detection so next frame doesn't see stale flags.
        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}

/// Register a state hook system under `key`.
///
/// Registered systems live as entities in bevy_ecs 0.18; marking them
/// Persistent keeps them alive through scene cleanup.
fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    key: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(key, id);
}
