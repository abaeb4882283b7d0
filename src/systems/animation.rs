//! Animation system.
//!
//! Advances sprite-sheet animations based on elapsed time and points the
//! entity's [`Sprite`](crate::components::sprite::Sprite) at the current
//! frame cell.
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities have an [`Animation`](crate::components::animation::Animation) component pointing to a key
//! 3. The `animation` system advances frames based on `fps` and updates the sprite offset
//!
//! Gameplay systems switch animations by calling
//! [`Animation::set_key`](crate::components::animation::Animation::set_key);
//! non-looped animations hold their last frame once finished.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up animation data from [`AnimationStore`].
/// - Mutates [`Animation`] component state and the [`Sprite`] source offset.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };

        anim_comp.elapsed_time += time.delta;

        let frame_duration = 1.0 / animation.fps;
        while anim_comp.elapsed_time >= frame_duration {
            anim_comp.elapsed_time -= frame_duration;
            if anim_comp.frame_index + 1 < animation.frame_count {
                anim_comp.frame_index += 1;
            } else if animation.looped {
                anim_comp.frame_index = 0;
            } else {
                // stay on last frame
                anim_comp.frame_index = animation.frame_count - 1;
                break;
            }
        }

        sprite.tex_key = animation.tex_key.to_string();
        sprite.width = animation.frame_width;
        sprite.height = animation.frame_height;
        sprite.offset = Vector2 {
            x: anim_comp.frame_index as f32 * animation.frame_width,
            y: animation.row as f32 * animation.frame_height,
        };
    }
}

/// True once a non-looped animation sits on its final frame.
pub fn animation_finished(anim: &Animation, store: &AnimationStore) -> bool {
    store
        .get(&anim.animation_key)
        .is_some_and(|res| !res.looped && anim.frame_index + 1 >= res.frame_count)
}
