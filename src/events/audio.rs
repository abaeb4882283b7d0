//! Messages exchanged with the audio playback thread.
//!
//! Gameplay writes [`AudioCmd`] messages; the bridge systems in
//! [`crate::systems::audio`] ship them to the thread and feed its
//! [`AudioMessage`] replies back into the world.

use bevy_ecs::message::Message;

/// Requests sent to the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Replies from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicReady { id: String },
    MusicFailed { id: String, error: String },
    MusicStarted { id: String },
    /// A non-looped track reached its end.
    MusicFinished { id: String },
    FxReady { id: String },
    FxFailed { id: String, error: String },
}
