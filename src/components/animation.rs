use bevy_ecs::prelude::Component;

/// Playback state for an animation defined in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
///
/// The animation system advances `frame_index` at the animation's fps and
/// writes the matching frame offset into the entity's
/// [`Sprite`](crate::components::sprite::Sprite). Gameplay switches what an
/// entity shows by assigning a different `animation_key`.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to another animation, restarting playback. Assigning the key
    /// it is already playing leaves the current frame alone.
    pub fn set_key(&mut self, animation_key: impl Into<String>) {
        let animation_key = animation_key.into();
        if self.animation_key != animation_key {
            self.animation_key = animation_key;
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}
