//! Level zone component: killboxes, pickups, and the exit.
//!
//! A zone is an axis-aligned rectangle with a kind resolved once at level
//! load. The zones system tests the player against zones using nine sample
//! points spread over the player's square (center, edge midpoints, corners)
//! instead of a rectangle intersection; partial overlaps at corners are
//! tolerated by design.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Spike orientation of a killbox, selected at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeStyle {
    Up,
    Down,
    Left,
    Right,
}

impl SpikeStyle {
    /// Parse the level file's style string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "spike_up" => Some(SpikeStyle::Up),
            "spike_down" => Some(SpikeStyle::Down),
            "spike_left" => Some(SpikeStyle::Left),
            "spike_right" => Some(SpikeStyle::Right),
            _ => None,
        }
    }

    /// Texture used to draw a killbox of this orientation.
    pub fn texture_key(&self) -> &'static str {
        match self {
            SpikeStyle::Up => "spike_up",
            SpikeStyle::Down => "spike_down",
            SpikeStyle::Left => "spike_left",
            SpikeStyle::Right => "spike_right",
        }
    }
}

/// What a pickup grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupKind {
    /// Refill the bubble to full volume.
    Soap,
    /// One more patch in the inventory.
    Patch,
}

impl PickupKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "soap" => Some(PickupKind::Soap),
            "patch" => Some(PickupKind::Patch),
            _ => None,
        }
    }

    pub fn texture_key(&self) -> &'static str {
        match self {
            PickupKind::Soap => "soap",
            PickupKind::Patch => "patch",
        }
    }
}

/// Kind of a level zone.
#[derive(Clone, Debug, PartialEq)]
pub enum ZoneKind {
    Killbox { style: SpikeStyle },
    Pickup { kind: PickupKind },
    Exit { next_level: Option<String> },
}

/// Axis-aligned zone rectangle.
///
/// `order` preserves level-declaration order so zones are always visited in
/// the order the level file lists them.
#[derive(Component, Clone, Debug)]
pub struct Zone {
    /// Top-left corner in world space.
    pub pos: Vector2,
    pub size: Vector2,
    pub kind: ZoneKind,
    pub order: u32,
}

impl Zone {
    pub fn new(pos: Vector2, size: Vector2, kind: ZoneKind, order: u32) -> Self {
        Self {
            pos,
            size,
            kind,
            order,
        }
    }

    /// Point-in-rectangle test, inclusive of the left/top edges.
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }

    /// True when any of the given sample points lands inside the zone.
    pub fn hit_by_any(&self, samples: &[Vector2; 9]) -> bool {
        samples.iter().any(|p| self.contains_point(*p))
    }
}

/// The nine sample points used to test the player against zones: center,
/// four edge midpoints, and four corners, offset by half of `size`.
pub fn sample_points(center: Vector2, size: f32) -> [Vector2; 9] {
    let h = size * 0.5;
    [
        center,
        Vector2 {
            x: center.x - h,
            y: center.y,
        },
        Vector2 {
            x: center.x + h,
            y: center.y,
        },
        Vector2 {
            x: center.x,
            y: center.y - h,
        },
        Vector2 {
            x: center.x,
            y: center.y + h,
        },
        Vector2 {
            x: center.x - h,
            y: center.y - h,
        },
        Vector2 {
            x: center.x + h,
            y: center.y - h,
        },
        Vector2 {
            x: center.x - h,
            y: center.y + h,
        },
        Vector2 {
            x: center.x + h,
            y: center.y + h,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn killbox(x: f32, y: f32, w: f32, h: f32) -> Zone {
        Zone::new(
            Vector2 { x, y },
            Vector2 { x: w, y: h },
            ZoneKind::Killbox {
                style: SpikeStyle::Up,
            },
            0,
        )
    }

    #[test]
    fn test_contains_point_inside() {
        let zone = killbox(10.0, 10.0, 20.0, 20.0);
        assert!(zone.contains_point(Vector2 { x: 15.0, y: 15.0 }));
    }

    #[test]
    fn test_contains_point_outside() {
        let zone = killbox(10.0, 10.0, 20.0, 20.0);
        assert!(!zone.contains_point(Vector2 { x: 31.0, y: 15.0 }));
        assert!(!zone.contains_point(Vector2 { x: 15.0, y: 9.0 }));
    }

    #[test]
    fn test_contains_point_edges() {
        let zone = killbox(10.0, 10.0, 20.0, 20.0);
        assert!(zone.contains_point(Vector2 { x: 10.0, y: 10.0 }));
        assert!(!zone.contains_point(Vector2 { x: 30.0, y: 30.0 }));
    }

    #[test]
    fn test_sample_points_layout() {
        let samples = sample_points(Vector2 { x: 100.0, y: 100.0 }, 24.0);
        assert_eq!(samples[0], Vector2 { x: 100.0, y: 100.0 });
        // Edge midpoints at +-12.
        assert_eq!(samples[1], Vector2 { x: 88.0, y: 100.0 });
        assert_eq!(samples[2], Vector2 { x: 112.0, y: 100.0 });
        assert_eq!(samples[3], Vector2 { x: 100.0, y: 88.0 });
        assert_eq!(samples[4], Vector2 { x: 100.0, y: 112.0 });
        // Corners.
        assert_eq!(samples[5], Vector2 { x: 88.0, y: 88.0 });
        assert_eq!(samples[8], Vector2 { x: 112.0, y: 112.0 });
    }

    #[test]
    fn test_hit_by_any_cluster_outside() {
        let zone = killbox(0.0, 0.0, 10.0, 10.0);
        let samples = sample_points(Vector2 { x: 100.0, y: 100.0 }, 24.0);
        assert!(!zone.hit_by_any(&samples));
    }

    #[test]
    fn test_hit_by_any_center_inside() {
        let zone = killbox(90.0, 90.0, 20.0, 20.0);
        let samples = sample_points(Vector2 { x: 100.0, y: 100.0 }, 24.0);
        assert!(zone.hit_by_any(&samples));
    }

    #[test]
    fn test_hit_by_any_corner_only() {
        // Zone just catches the bottom-right corner sample.
        let zone = killbox(110.0, 110.0, 10.0, 10.0);
        let samples = sample_points(Vector2 { x: 100.0, y: 100.0 }, 24.0);
        assert!(!zone.contains_point(samples[0]));
        assert!(zone.hit_by_any(&samples));
    }

    #[test]
    fn test_spike_style_parse() {
        assert_eq!(SpikeStyle::from_str("spike_up"), Some(SpikeStyle::Up));
        assert_eq!(SpikeStyle::from_str("spike_left"), Some(SpikeStyle::Left));
        assert_eq!(SpikeStyle::from_str("lava"), None);
    }

    #[test]
    fn test_pickup_kind_parse() {
        assert_eq!(PickupKind::from_str("soap"), Some(PickupKind::Soap));
        assert_eq!(PickupKind::from_str("patch"), Some(PickupKind::Patch));
        assert_eq!(PickupKind::from_str("coin"), None);
    }
}
