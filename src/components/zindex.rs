//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The render system sorts by
/// `ZIndex` to achieve a painter's algorithm. Background layers use
/// negative values, the player and platforms sit at zero and above.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
