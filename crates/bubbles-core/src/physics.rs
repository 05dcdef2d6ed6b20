//! rapier2d binding for the bubble arena.
//!
//! Positions are in arena pixels. Velocities cross this API in pixels per
//! tick and are converted to rapier's per-second units internally, so the
//! rest of the crate can keep the tuning constants in tick units.

use crate::constants::{AIR_DRAG, FRICTION, RESTITUTION, TICK_HZ};
use glam::Vec2;
use rapier2d::prelude::*;

pub use rapier2d::prelude::RigidBodyHandle as BodyHandle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub restitution: f32,
    pub friction: f32,
    /// Fraction of velocity lost to drag each tick.
    pub air_drag: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: RESTITUTION,
            friction: FRICTION,
            air_drag: AIR_DRAG,
        }
    }
}

/// Linear damping that removes `air_drag` of the velocity per step of `dt`.
///
/// rapier applies `v *= 1 / (1 + dt * damping)` per step.
#[inline]
pub fn linear_damping_for_drag(air_drag: f32, dt: f32) -> f32 {
    let keep = (1.0 - air_drag).clamp(f32::EPSILON, 1.0);
    (1.0 / keep - 1.0) / dt
}

#[inline]
fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

#[inline]
fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let params = IntegrationParameters {
            dt: 1.0 / TICK_HZ,
            ..Default::default()
        };
        Self {
            gravity: vector![0.0, 0.0],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
        }
    }

    /// Immovable rectangle centred on `center`.
    pub fn add_static_rect(&mut self, center: Vec2, size: Vec2) -> BodyHandle {
        let body = RigidBodyBuilder::fixed().translation(to_vector(center)).build();
        let collider = ColliderBuilder::cuboid(size.x / 2.0, size.y / 2.0).build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    pub fn add_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        velocity: Vec2,
        material: Material,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_vector(center))
            .linvel(to_vector(velocity * TICK_HZ))
            .linear_damping(linear_damping_for_drag(material.air_drag, self.params.dt))
            .can_sleep(false)
            .ccd_enabled(true)
            .build();
        // Max/Min combine so walls (default material) do not soak up bounce.
        let collider = ColliderBuilder::ball(radius)
            .restitution(material.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .friction(material.friction)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Remove a body and its colliders. Returns false for unknown handles.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(handle).map(|b| from_vector(b.translation()))
    }

    /// Velocity in pixels per tick.
    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|b| from_vector(b.linvel()) / TICK_HZ)
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(b) = self.bodies.get_mut(handle) {
            b.set_linvel(to_vector(velocity * TICK_HZ), true);
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// Remove every body, static or dynamic.
    pub fn clear(&mut self) {
        let handles: Vec<BodyHandle> = self.bodies.iter().map(|(h, _)| h).collect();
        for h in handles {
            self.remove(h);
        }
    }
}
