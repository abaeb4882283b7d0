//! HUD marker components.

use bevy_ecs::prelude::Component;

/// One patch icon in the inventory display.
///
/// Twenty icons are spawned when play starts, laid out in two rows of ten.
/// The HUD system shows the first `patches` of them and hides the rest by
/// zeroing their tint alpha.
#[derive(Component, Clone, Copy, Debug)]
pub struct PatchIcon {
    /// Slot index, 0..[`PATCH_MAX`](crate::tuning::PATCH_MAX).
    pub index: u32,
}

/// Layout of a patch icon slot in screen space: two rows of ten.
pub fn patch_icon_pos(index: u32) -> (f32, f32) {
    let x = (index % 10) as f32 * 12.0 + 6.0;
    let y = (index / 10) as f32 * 16.0 + 8.0;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_layout() {
        assert_eq!(patch_icon_pos(0), (6.0, 8.0));
        assert_eq!(patch_icon_pos(9), (114.0, 8.0));
    }

    #[test]
    fn test_second_row_layout() {
        assert_eq!(patch_icon_pos(10), (6.0, 24.0));
        assert_eq!(patch_icon_pos(19), (114.0, 24.0));
    }
}
