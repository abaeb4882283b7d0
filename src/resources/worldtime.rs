use bevy_ecs::prelude::Resource;

/// Frame timing shared by every simulation system.
///
/// `delta` is already multiplied by `time_scale` when the time system
/// updates it, so consumers use it directly.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
