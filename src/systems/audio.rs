//! Audio playback on a dedicated thread.
//!
//! Raylib's audio device is not thread-safe, so every call into it lives on
//! one background thread spawned by
//! [`setup_audio`](crate::resources::audio::setup_audio). The systems here
//! bridge that thread with the ECS world:
//! - [`forward_audio_cmds`] ships [`AudioCmd`] messages over the command
//!   channel.
//! - [`poll_audio_messages`] drains the thread's [`AudioMessage`] replies
//!   into the world's message queue.
//! - the `update_bevy_*` pair advances both queues once per frame.
//!
//! Music streams need periodic `update_stream()` calls; the thread loop
//! pumps them between command batches.

use std::thread;
use std::time::Duration;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::FxHashMap;

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.events.try_iter());
}

/// Advance the `AudioMessage` queue so this frame's writes become readable.
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward queued [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Send errors only happen during shutdown.
        let _ = bridge.commands.send(cmd.clone());
    }
}

/// Advance the `AudioCmd` queue so this frame's writes become readable.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

struct Track<'a> {
    stream: Music<'a>,
    looped: bool,
    playing: bool,
}

/// Owns all music and sound handles; lives entirely on the audio thread.
struct Mixer<'a> {
    music: FxHashMap<String, Track<'a>>,
    sounds: FxHashMap<String, Sound<'a>>,
}

impl<'a> Mixer<'a> {
    fn new() -> Self {
        Self {
            music: FxHashMap::default(),
            sounds: FxHashMap::default(),
        }
    }

    /// Apply one command. Returns false when a shutdown was requested.
    fn handle(
        &mut self,
        audio: &'a RaylibAudio,
        cmd: AudioCmd,
        events: &Sender<AudioMessage>,
    ) -> bool {
        match cmd {
            AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                Ok(stream) => {
                    debug!("music '{}' loaded from {}", id, path);
                    self.music.insert(
                        id.clone(),
                        Track {
                            stream,
                            looped: false,
                            playing: false,
                        },
                    );
                    let _ = events.send(AudioMessage::MusicReady { id });
                }
                Err(e) => {
                    warn!("music '{}' failed to load from {}: {}", id, path, e);
                    let _ = events.send(AudioMessage::MusicFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayMusic { id, looped } => {
                if let Some(track) = self.music.get_mut(&id) {
                    track.stream.seek_stream(0.0);
                    track.stream.play_stream();
                    track.looped = looped;
                    track.playing = true;
                    let _ = events.send(AudioMessage::MusicStarted { id });
                }
            }
            AudioCmd::StopMusic { id } => {
                if let Some(track) = self.music.get_mut(&id) {
                    track.stream.stop_stream();
                    track.playing = false;
                }
            }
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("fx '{}' loaded from {}", id, path);
                    self.sounds.insert(id.clone(), sound);
                    let _ = events.send(AudioMessage::FxReady { id });
                }
                Err(e) => {
                    warn!("fx '{}' failed to load from {}: {}", id, path, e);
                    let _ = events.send(AudioMessage::FxFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = self.sounds.get(&id) {
                    sound.play();
                } else {
                    warn!("fx '{}' not loaded", id);
                }
            }
            AudioCmd::Shutdown => return false,
        }
        true
    }

    /// Keep active streams fed; restart looped tracks that ran out and
    /// report finished ones exactly once.
    fn pump(&mut self, events: &Sender<AudioMessage>) {
        for (id, track) in self.music.iter_mut() {
            if !track.playing {
                continue;
            }
            if track.stream.is_stream_playing() {
                track.stream.update_stream();
            } else if track.stream.get_time_played() >= track.stream.get_time_length() - 0.01 {
                if track.looped {
                    track.stream.seek_stream(0.0);
                    track.stream.play_stream();
                    let _ = events.send(AudioMessage::MusicStarted { id: id.clone() });
                } else {
                    track.playing = false;
                    let _ = events.send(AudioMessage::MusicFinished { id: id.clone() });
                }
            }
        }
    }
}

/// Entry point of the audio thread. Blocks until [`AudioCmd::Shutdown`].
pub fn audio_thread(commands: Receiver<AudioCmd>, events: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("audio device init failed: {}", e);
            return;
        }
    };
    info!("audio thread up (id={:?})", thread::current().id());

    let mut mixer = Mixer::new();
    'run: loop {
        for cmd in commands.try_iter() {
            if !mixer.handle(&audio, cmd, &events) {
                break 'run;
            }
        }
        mixer.pump(&events);
        thread::sleep(Duration::from_millis(10));
    }

    info!("audio thread down");
    // Mixer drops its Music and Sound handles before `audio` goes away.
}
