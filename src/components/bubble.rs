//! Player bubble component.
//!
//! The bubble is the player's only resource and only means of movement.
//! Puncturing it opens a directional leak: air escapes, volume drains, and
//! the escaping jet pushes the player the opposite way. Patches close leaks
//! again, one inventory patch per action no matter how many leaks it seals.
//!
//! Volume runs from 1.0 (full) downward. Crossing below zero bursts the
//! bubble, which is terminal for that life: once the player is unbubbled and
//! stops moving, a stillness timer counts up to the level restart.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::tuning::{
    BUBBLE_VOLUME_LOSS_FACTOR, PATCH_MAX, PATCH_TOLERANCE, PUNCTURE_DEAD_TIME,
};

/// Marker for the player entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;

/// Outcome of a patch action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    /// One patch was consumed; `removed` leaks were sealed.
    Applied { removed: usize },
    /// No leak was within tolerance of the given direction.
    NoMatch,
    /// The patch inventory is empty.
    Empty,
}

/// Bubble state carried by the player entity.
#[derive(Component, Clone, Debug)]
pub struct Bubble {
    /// Remaining volume. 1.0 is full; below 0.0 the bubble has burst.
    pub volume: f32,
    /// Active leak directions, stored as unit vectors.
    pub leaks: Vec<Vector2>,
    /// Patch inventory, clamped to `[0, PATCH_MAX]`.
    pub patches: u32,
    /// Seconds until puncture input is accepted again.
    pub puncture_cooldown: f32,
    /// Seconds left on the current stab animation.
    pub stab_cooldown: f32,
    /// Seconds spent unbubbled without measurable movement.
    pub still_time: f32,
}

impl Default for Bubble {
    fn default() -> Self {
        Self {
            volume: 1.0,
            leaks: Vec::new(),
            patches: 3,
            puncture_cooldown: 0.0,
            stab_cooldown: 0.0,
            still_time: 0.0,
        }
    }
}

impl Bubble {
    pub fn new(patches: u32) -> Self {
        Self {
            patches: patches.min(PATCH_MAX),
            ..Self::default()
        }
    }

    /// Whether the player is still inside the bubble.
    pub fn in_bubble(&self) -> bool {
        self.volume >= 0.0
    }

    /// Open a leak in `direction`. Rejected while the puncture cooldown is
    /// running or after the bubble has burst. Returns true when a leak was
    /// added.
    pub fn puncture(&mut self, direction: Vector2) -> bool {
        if !self.in_bubble() || self.puncture_cooldown > 0.0 {
            return false;
        }
        let len = direction.length();
        if len <= f32::EPSILON {
            return false;
        }
        self.leaks.push(direction.scale_by(1.0 / len));
        self.puncture_cooldown = PUNCTURE_DEAD_TIME;
        true
    }

    /// Seal every leak within [`PATCH_TOLERANCE`] of `direction`.
    ///
    /// Consumes exactly one patch when at least one leak is removed,
    /// regardless of how many matched. A miss or an empty inventory leaves
    /// the leak set untouched.
    pub fn patch(&mut self, direction: Vector2) -> PatchOutcome {
        if self.patches == 0 {
            return PatchOutcome::Empty;
        }
        let len = direction.length();
        if len <= f32::EPSILON {
            return PatchOutcome::NoMatch;
        }
        let aim = direction.scale_by(1.0 / len);
        let before = self.leaks.len();
        self.leaks.retain(|leak| (*leak - aim).length() >= PATCH_TOLERANCE);
        let removed = before - self.leaks.len();
        if removed == 0 {
            return PatchOutcome::NoMatch;
        }
        self.patches -= 1;
        // Pressing the patch against the skin blocks stabbing for the same
        // dead time a fresh puncture does.
        self.puncture_cooldown = PUNCTURE_DEAD_TIME;
        PatchOutcome::Applied { removed }
    }

    /// Drain volume for this tick. Each active leak drains at the configured
    /// loss factor. Does nothing once the bubble has burst or while no leak
    /// is open.
    pub fn drain(&mut self, elapsed: f32) {
        if self.in_bubble() && !self.leaks.is_empty() {
            self.volume -= elapsed * self.leaks.len() as f32 * BUBBLE_VOLUME_LOSS_FACTOR;
        }
    }

    /// Net propulsion this tick: the sum of all leak directions inverted.
    /// The caller scales this by the blowout force factor.
    pub fn thrust(&self) -> Vector2 {
        let mut total = Vector2 { x: 0.0, y: 0.0 };
        for leak in &self.leaks {
            total = total - *leak;
        }
        total
    }

    /// Refill to a full bubble (soap pickup). Open leaks stay open; soap
    /// restores volume, not the skin.
    pub fn refill(&mut self) {
        self.volume = 1.0;
    }

    /// Add patches to the inventory, clamped to [`PATCH_MAX`].
    pub fn add_patches(&mut self, count: u32) {
        self.patches = (self.patches + count).min(PATCH_MAX);
    }

    /// Advance the puncture and stab cooldown timers.
    pub fn tick_timers(&mut self, elapsed: f32) {
        if self.puncture_cooldown > 0.0 {
            self.puncture_cooldown -= elapsed;
        }
        if self.stab_cooldown > 0.0 {
            self.stab_cooldown -= elapsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn punctured(dirs: &[(f32, f32)]) -> Bubble {
        let mut bubble = Bubble::default();
        for (x, y) in dirs {
            bubble.puncture_cooldown = 0.0;
            assert!(bubble.puncture(Vector2 { x: *x, y: *y }));
        }
        bubble
    }

    #[test]
    fn test_default_is_full_and_bubbled() {
        let bubble = Bubble::default();
        assert!(approx_eq(bubble.volume, 1.0));
        assert!(bubble.in_bubble());
        assert!(bubble.leaks.is_empty());
    }

    #[test]
    fn test_puncture_normalizes_direction() {
        let bubble = punctured(&[(3.0, 4.0)]);
        assert_eq!(bubble.leaks.len(), 1);
        assert!(approx_eq(bubble.leaks[0].x, 0.6));
        assert!(approx_eq(bubble.leaks[0].y, 0.8));
    }

    #[test]
    fn test_puncture_rejected_during_cooldown() {
        let mut bubble = Bubble::default();
        assert!(bubble.puncture(Vector2 { x: 1.0, y: 0.0 }));
        assert!(!bubble.puncture(Vector2 { x: 0.0, y: 1.0 }));
        assert_eq!(bubble.leaks.len(), 1);
    }

    #[test]
    fn test_puncture_rejected_after_burst() {
        let mut bubble = Bubble::default();
        bubble.volume = -0.1;
        assert!(!bubble.puncture(Vector2 { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn test_puncture_rejects_zero_direction() {
        let mut bubble = Bubble::default();
        assert!(!bubble.puncture(Vector2 { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_volume_unchanged_with_no_leaks() {
        let mut bubble = Bubble::default();
        bubble.drain(10.0);
        assert!(approx_eq(bubble.volume, 1.0));
    }

    #[test]
    fn test_volume_strictly_decreases_with_leak() {
        let mut bubble = punctured(&[(1.0, 0.0)]);
        let before = bubble.volume;
        bubble.drain(0.5);
        assert!(bubble.volume < before);
    }

    #[test]
    fn test_drain_two_leaks_two_seconds() {
        // Two leaks at loss factor 0.1 over 2 seconds: 1.0 - 2*0.1*2 = 0.6.
        let mut bubble = punctured(&[(1.0, 0.0), (0.0, 1.0)]);
        let mut t = 0.0;
        while t < 2.0 - EPSILON {
            bubble.drain(0.1);
            t += 0.1;
        }
        assert!(approx_eq(bubble.volume, 0.6));
    }

    #[test]
    fn test_patch_with_empty_inventory_is_noop() {
        let mut bubble = punctured(&[(1.0, 0.0)]);
        bubble.patches = 0;
        assert_eq!(bubble.patch(Vector2 { x: 1.0, y: 0.0 }), PatchOutcome::Empty);
        assert_eq!(bubble.leaks.len(), 1);
    }

    #[test]
    fn test_patch_miss_keeps_inventory_and_leaks() {
        let mut bubble = punctured(&[(1.0, 0.0)]);
        let patches = bubble.patches;
        assert_eq!(
            bubble.patch(Vector2 { x: -1.0, y: 0.0 }),
            PatchOutcome::NoMatch
        );
        assert_eq!(bubble.patches, patches);
        assert_eq!(bubble.leaks.len(), 1);
    }

    #[test]
    fn test_patch_removes_matching_leak_and_costs_one() {
        let mut bubble = punctured(&[(1.0, 0.0), (0.0, 1.0)]);
        let patches = bubble.patches;
        assert_eq!(
            bubble.patch(Vector2 { x: 1.0, y: 0.0 }),
            PatchOutcome::Applied { removed: 1 }
        );
        assert_eq!(bubble.patches, patches - 1);
        assert_eq!(bubble.leaks.len(), 1);
        assert!(approx_eq(bubble.leaks[0].y, 1.0));
    }

    #[test]
    fn test_patch_removes_all_leaks_within_tolerance_for_one_patch() {
        // Two nearly identical leaks plus one far away.
        let mut bubble = punctured(&[(1.0, 0.0), (1.0, 0.1), (0.0, 1.0)]);
        let patches = bubble.patches;
        assert_eq!(
            bubble.patch(Vector2 { x: 1.0, y: 0.0 }),
            PatchOutcome::Applied { removed: 2 }
        );
        assert_eq!(bubble.patches, patches - 1);
        assert_eq!(bubble.leaks.len(), 1);
    }

    #[test]
    fn test_thrust_opposes_leaks() {
        let bubble = punctured(&[(1.0, 0.0)]);
        let t = bubble.thrust();
        assert!(approx_eq(t.x, -1.0));
        assert!(approx_eq(t.y, 0.0));
    }

    #[test]
    fn test_thrust_sums_all_leaks() {
        let bubble = punctured(&[(1.0, 0.0), (0.0, 1.0)]);
        let t = bubble.thrust();
        assert!(approx_eq(t.x, -1.0));
        assert!(approx_eq(t.y, -1.0));
    }

    #[test]
    fn test_refill_restores_volume_but_keeps_leaks() {
        let mut bubble = punctured(&[(1.0, 0.0)]);
        bubble.volume = 0.2;
        bubble.refill();
        assert!(approx_eq(bubble.volume, 1.0));
        assert_eq!(bubble.leaks.len(), 1);
    }

    #[test]
    fn test_patch_arms_the_puncture_dead_time() {
        let mut bubble = punctured(&[(1.0, 0.0)]);
        bubble.puncture_cooldown = 0.0;
        assert_eq!(
            bubble.patch(Vector2 { x: 1.0, y: 0.0 }),
            PatchOutcome::Applied { removed: 1 }
        );
        assert!(!bubble.puncture(Vector2 { x: 0.0, y: 1.0 }));
        bubble.tick_timers(PUNCTURE_DEAD_TIME + 0.01);
        assert!(bubble.puncture(Vector2 { x: 0.0, y: 1.0 }));
    }

    #[test]
    fn test_add_patches_clamps_to_max() {
        let mut bubble = Bubble::default();
        bubble.add_patches(100);
        assert_eq!(bubble.patches, PATCH_MAX);
    }

    #[test]
    fn test_burst_threshold_is_zero() {
        let mut bubble = Bubble::default();
        bubble.volume = 0.0;
        assert!(bubble.in_bubble());
        bubble.volume = -0.001;
        assert!(!bubble.in_bubble());
    }
}
