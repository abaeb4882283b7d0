//! HUD systems.
//!
//! The patch inventory is shown as a grid of icons in the top-left corner.
//! Icons exist for the full `PATCH_MAX` range and are shown or hidden by
//! tint alpha, so pickups and consumption never spawn or despawn HUD
//! entities mid-level.

use bevy_ecs::prelude::*;

use crate::components::bubble::{Bubble, Player};
use crate::components::hud::PatchIcon;
use crate::components::tint::Tint;
use crate::events::gameplay::PatchConsumedMessage;
use bevy_ecs::prelude::Messages;
use log::debug;

/// Show one icon per patch currently held.
pub fn hud_patch_system(
    players: Query<&Bubble, With<Player>>,
    mut icons: Query<(&PatchIcon, &mut Tint)>,
) {
    let Ok(bubble) = players.single() else {
        return;
    };
    for (icon, mut tint) in icons.iter_mut() {
        tint.color.a = if icon.index < bubble.patches { 255 } else { 0 };
    }
}

/// Log patch consumption; the icon grid already reflects the new count.
pub fn hud_patch_feedback_system(mut reader: MessageReader<PatchConsumedMessage>) {
    for message in reader.read() {
        debug!(
            "patch consumed: sealed {} leak(s), {} left",
            message.sealed, message.remaining
        );
    }
}

/// Advance the gameplay message queues once per frame.
pub fn update_gameplay_messages(
    mut patches: ResMut<Messages<PatchConsumedMessage>>,
    mut bursts: ResMut<Messages<crate::events::gameplay::BubbleBurstMessage>>,
    mut deaths: ResMut<Messages<crate::events::gameplay::PlayerDiedMessage>>,
) {
    patches.update();
    bursts.update();
    deaths.update();
}
