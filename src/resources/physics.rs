//! Rapier-backed physics world resource.
//!
//! Owns every rapier set and pipeline stage for the currently loaded level.
//! Gameplay systems never integrate motion themselves; they command the
//! world through the accessors here (read position/velocity, write velocity,
//! apply force) and [`step`](PhysicsWorld::step) advances the simulation
//! once per frame.
//!
//! Units are pixels and seconds throughout. The world runs without global
//! gravity; a full bubble hovers, and systems push a burst player down with
//! [`apply_fall_force`](PhysicsWorld::apply_fall_force). +Y is down to match
//! screen coordinates.
//!
//! A fresh `PhysicsWorld` is built on every level load and replaces the
//! resource wholesale, so teardown never has to remove bodies one by one.

use bevy_ecs::prelude::Resource;
use rapier2d::prelude::*;
use raylib::prelude::Vector2 as RayVector2;

use crate::tuning::GRAVITY;

/// Physics world for one level.
#[derive(Resource)]
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    gravity: Vector<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: vector![0.0, 0.0],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Dynamic ball body for the player. Rotations are locked; the bubble
    /// slides rather than rolls.
    pub fn spawn_player(&mut self, x: f32, y: f32, radius: f32) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .lock_rotations()
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::ball(radius)
            .friction(0.4)
            .restitution(0.2)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Velocity-driven kinematic rectangle for a moving platform.
    pub fn spawn_platform(&mut self, x: f32, y: f32, width: f32, height: f32) -> RigidBodyHandle {
        let body = RigidBodyBuilder::kinematic_velocity_based()
            .translation(vector![x, y])
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(width * 0.5, height * 0.5)
            .friction(0.8)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Fixed rectangle for static level geometry. `x`/`y` is the top-left
    /// corner, as in the level file.
    pub fn spawn_wall(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![x + width * 0.5, y + height * 0.5])
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(width * 0.5, height * 0.5).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
    }

    pub fn position(&self, handle: RigidBodyHandle) -> Option<RayVector2> {
        self.bodies.get(handle).map(|body| {
            let t = body.translation();
            RayVector2 { x: t.x, y: t.y }
        })
    }

    pub fn set_position(&mut self, handle: RigidBodyHandle, pos: RayVector2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(vector![pos.x, pos.y], true);
        }
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<RayVector2> {
        self.bodies.get(handle).map(|body| {
            let v = body.linvel();
            RayVector2 { x: v.x, y: v.y }
        })
    }

    pub fn set_velocity(&mut self, handle: RigidBodyHandle, vel: RayVector2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(vector![vel.x, vel.y], true);
        }
    }

    /// Replace the force accumulated on the body with `force` for this tick.
    pub fn apply_force(&mut self, handle: RigidBodyHandle, force: RayVector2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.reset_forces(true);
            body.add_force(vector![force.x, force.y], true);
        }
    }

    /// Replace the force on the body with a downward pull of [`GRAVITY`]
    /// pixels per second squared, scaled by the body's mass.
    pub fn apply_fall_force(&mut self, handle: RigidBodyHandle) {
        if let Some(body) = self.bodies.get_mut(handle) {
            let pull = GRAVITY * body.mass();
            body.reset_forces(true);
            body.add_force(vector![0.0, pull], true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_spawned_player_reports_position() {
        let mut world = PhysicsWorld::new();
        let handle = world.spawn_player(100.0, 50.0, 12.0);
        let pos = world.position(handle).unwrap();
        assert!((pos.x - 100.0).abs() < EPSILON);
        assert!((pos.y - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_kinematic_platform_follows_commanded_velocity() {
        let mut world = PhysicsWorld::new();
        let handle = world.spawn_platform(0.0, 0.0, 64.0, 16.0);
        world.set_velocity(handle, RayVector2 { x: 10.0, y: 0.0 });
        for _ in 0..10 {
            world.step(0.1);
        }
        let pos = world.position(handle).unwrap();
        assert!((pos.x - 10.0).abs() < 0.1, "platform at {}", pos.x);
        assert!(pos.y.abs() < EPSILON);
    }

    #[test]
    fn test_dynamic_body_hovers_without_forces() {
        let mut world = PhysicsWorld::new();
        let handle = world.spawn_player(0.0, 0.0, 12.0);
        for _ in 0..30 {
            world.step(1.0 / 60.0);
        }
        let pos = world.position(handle).unwrap();
        assert!(pos.y.abs() < EPSILON, "player drifted to y={}", pos.y);
    }

    #[test]
    fn test_fall_force_pulls_the_body_down() {
        let mut world = PhysicsWorld::new();
        let handle = world.spawn_player(0.0, 0.0, 12.0);
        for _ in 0..30 {
            world.apply_fall_force(handle);
            world.step(1.0 / 60.0);
        }
        let pos = world.position(handle).unwrap();
        assert!(pos.y > 0.0, "player should fall, got y={}", pos.y);
    }

    #[test]
    fn test_force_accelerates_the_body() {
        let mut world = PhysicsWorld::new();
        let handle = world.spawn_player(0.0, 0.0, 12.0);
        for _ in 0..30 {
            world.apply_force(handle, RayVector2 { x: 0.0, y: -50000.0 });
            world.step(1.0 / 60.0);
        }
        let pos = world.position(handle).unwrap();
        assert!(pos.y < 0.0, "player should rise, got y={}", pos.y);
    }
}
