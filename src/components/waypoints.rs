//! Waypoint path component for moving platforms.
//!
//! A [`WaypointPath`] holds an ordered list of waypoints and walks back and
//! forth across them (ping-pong). Each tick it produces a velocity command
//! for the platform's kinematic physics body. Waypoints can carry a wait
//! time which holds the platform at that waypoint when it arrives there as a
//! leg destination.
//!
//! The path never integrates positions itself; the platform system feeds the
//! commanded velocity to the physics body and snaps the body to the exact
//! destination on arrival.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

/// A single stop on a platform's path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// World position of the waypoint.
    pub position: Vector2,
    /// Seconds the platform holds still after arriving here.
    pub wait: f32,
}

impl Waypoint {
    pub fn new(x: f32, y: f32, wait: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            wait,
        }
    }
}

/// Result of one sequencer tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    /// Velocity to command this tick.
    pub velocity: Vector2,
    /// Set when a leg completed this tick; holds the exact destination the
    /// platform should be snapped to.
    pub arrived_at: Option<Vector2>,
}

/// Ping-pong waypoint sequencer.
///
/// `current_index` always names the start of the current leg and stays in
/// `0..len-1`. Moving forward the leg runs `current_index` to
/// `current_index + 1`; moving backward it runs `current_index + 1` down to
/// `current_index`. Direction flips only at the sequence ends.
#[derive(Component, Clone, Debug)]
pub struct WaypointPath {
    pub waypoints: Vec<Waypoint>,
    pub speed: f32,
    /// Startup delay before the first leg begins.
    pub time_offset: f32,
    pub current_index: usize,
    pub moving_forward: bool,
    pub current_velocity: Vector2,
    /// Seconds remaining on the current leg.
    pub time_til_next: f32,
    /// Wait required before the next leg starts (the destination's wait).
    pending_wait: f32,
    wait_accumulated: f32,
    leg_active: bool,
}

impl WaypointPath {
    /// Build a path from at least two waypoints.
    pub fn new(waypoints: Vec<Waypoint>, speed: f32, time_offset: f32) -> Self {
        debug_assert!(waypoints.len() >= 2, "a path needs at least two waypoints");
        Self {
            waypoints,
            speed,
            time_offset,
            current_index: 0,
            moving_forward: true,
            current_velocity: Vector2 { x: 0.0, y: 0.0 },
            time_til_next: 0.0,
            pending_wait: 0.0,
            wait_accumulated: 0.0,
            leg_active: false,
        }
    }

    /// Position of the first waypoint, where the platform spawns.
    pub fn start_position(&self) -> Vector2 {
        self.waypoints[0].position
    }

    fn leg_endpoints(&self) -> (Vector2, Vector2) {
        let a = self.waypoints[self.current_index].position;
        let b = self.waypoints[self.current_index + 1].position;
        if self.moving_forward { (a, b) } else { (b, a) }
    }

    /// Index of the waypoint the current leg travels toward.
    fn destination_index(&self) -> usize {
        if self.moving_forward {
            self.current_index + 1
        } else {
            self.current_index
        }
    }

    /// Advance past the waypoint just arrived at. Flips direction at either
    /// end of the sequence.
    fn advance(&mut self) {
        let last_leg = self.waypoints.len() - 2;
        if self.moving_forward {
            if self.current_index == last_leg {
                self.moving_forward = false;
            } else {
                self.current_index += 1;
            }
        } else if self.current_index == 0 {
            self.moving_forward = true;
        } else {
            self.current_index -= 1;
        }
    }

    /// Advance the sequencer by `elapsed` seconds and return the velocity to
    /// command, plus the arrival snap position when a leg completes.
    pub fn tick(&mut self, elapsed: f32) -> PathStep {
        let zero = Vector2 { x: 0.0, y: 0.0 };

        if self.time_offset > 0.0 {
            self.time_offset -= elapsed;
            self.current_velocity = zero;
            return PathStep {
                velocity: zero,
                arrived_at: None,
            };
        }

        if self.wait_accumulated < self.pending_wait {
            self.wait_accumulated += elapsed;
            self.current_velocity = zero;
            return PathStep {
                velocity: zero,
                arrived_at: None,
            };
        }

        if !self.leg_active {
            let (from, to) = self.leg_endpoints();
            let delta = to - from;
            let distance = delta.length();
            if distance <= f32::EPSILON || self.speed <= 0.0 {
                // Degenerate leg: arrive immediately.
                self.current_velocity = zero;
                let dest = self.waypoints[self.destination_index()];
                self.pending_wait = dest.wait;
                self.wait_accumulated = 0.0;
                self.advance();
                return PathStep {
                    velocity: zero,
                    arrived_at: Some(dest.position),
                };
            }
            self.current_velocity = delta.normalized().scale_by(self.speed);
            self.time_til_next = distance / self.speed;
            self.leg_active = true;
        }

        self.time_til_next -= elapsed;
        if self.time_til_next <= 0.0 {
            self.leg_active = false;
            let dest = self.waypoints[self.destination_index()];
            self.pending_wait = dest.wait;
            self.wait_accumulated = 0.0;
            self.advance();
            self.current_velocity = zero;
            return PathStep {
                velocity: zero,
                arrived_at: Some(dest.position),
            };
        }

        PathStep {
            velocity: self.current_velocity,
            arrived_at: None,
        }
    }
}

/// Relation from a platform to the killbox that rides along with it.
///
/// `offset` is captured at level load as the killbox's initial position
/// minus the platform's first waypoint. The platform system re-positions the
/// killbox every tick to platform position plus this offset.
#[derive(Component, Clone, Copy, Debug)]
pub struct LinkedKillbox {
    pub target: Entity,
    pub offset: Vector2,
}
