//! Bridge between the world and the audio playback thread.
//!
//! [`setup_audio`] spawns the thread once at startup; [`shutdown_audio`]
//! asks it to stop and joins it during teardown.

use std::thread::JoinHandle;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;

/// Channel endpoints for talking to the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    pub commands: Sender<AudioCmd>,
    pub events: Receiver<AudioMessage>,
    worker: JoinHandle<()>,
}

/// Spawn the audio thread and insert the bridge plus its message queues.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let worker = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        commands: tx_cmd,
        events: rx_msg,
        worker,
    });
    world.insert_resource(Messages::<AudioCmd>::default());
    world.insert_resource(Messages::<AudioMessage>::default());
}

/// Ask the audio thread to stop, then wait for it to exit.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.commands.send(AudioCmd::Shutdown);
        let _ = bridge.worker.join();
    }
}
