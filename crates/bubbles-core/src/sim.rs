//! Simulation loop: arena walls, one circle per genre, fixed stepping and
//! the idle watchdog.

use crate::catalog::{find, Genre, Rgb};
use crate::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, IDLE_NUDGE_SPEED, IDLE_SPEED_SQ, INIT_SPEED_MAX, INIT_SPEED_MIN,
    SPAWN_RING_FRACTION, SPAWN_RING_INSET, WALL_THICKNESS,
};
use crate::physics::{BodyHandle, Material, PhysicsWorld};
use crate::radius::radius_for_votes;
use crate::registry::{BodyRegistry, RegisteredBody};
use crate::votes::VoteTally;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub ring_fraction: f32,
    pub ring_inset: f32,
    pub init_speed_min: f32,
    pub init_speed_max: f32,
    pub material: Material,
    pub idle_speed_sq: f32,
    pub nudge_speed: f32,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            ring_fraction: SPAWN_RING_FRACTION,
            ring_inset: SPAWN_RING_INSET,
            init_speed_min: INIT_SPEED_MIN,
            init_speed_max: INIT_SPEED_MAX,
            material: Material::default(),
            idle_speed_sq: IDLE_SPEED_SQ,
            nudge_speed: IDLE_NUDGE_SPEED,
            seed: 42,
        }
    }
}

impl SimConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Snapshot of one genre's body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimBody {
    pub genre_key: &'static str,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

#[inline]
pub(crate) fn random_direction(rng: &mut impl Rng) -> Vec2 {
    Vec2::from_angle(rng.gen::<f32>() * TAU)
}

pub struct Simulation {
    catalog: &'static [Genre],
    config: SimConfig,
    world: Option<PhysicsWorld>,
    walls: Vec<BodyHandle>,
    registry: BodyRegistry,
    rng: StdRng,
    running: bool,
}

impl Simulation {
    pub fn new(catalog: &'static [Genre], tally: &VoteTally, config: SimConfig) -> Self {
        let mut world = PhysicsWorld::new();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let (w, h, t) = (config.width, config.height, config.wall_thickness);

        let walls = vec![
            world.add_static_rect(Vec2::new(w / 2.0, -t / 2.0), Vec2::new(w, t)),
            world.add_static_rect(Vec2::new(w / 2.0, h + t / 2.0), Vec2::new(w, t)),
            world.add_static_rect(Vec2::new(-t / 2.0, h / 2.0), Vec2::new(t, h)),
            world.add_static_rect(Vec2::new(w + t / 2.0, h / 2.0), Vec2::new(t, h)),
        ];

        let center = Vec2::new(w / 2.0, h / 2.0);
        let ring = w.min(h) * config.ring_fraction * config.ring_inset;
        let mut registry = BodyRegistry::new();
        for (i, g) in catalog.iter().enumerate() {
            let angle = i as f32 / catalog.len() as f32 * TAU;
            let pos = center + Vec2::from_angle(angle) * ring;
            let speed = rng.gen_range(config.init_speed_min..=config.init_speed_max);
            let vel = random_direction(&mut rng) * speed;
            let radius = radius_for_votes(tally.count(g.key));
            let handle = world.add_circle(pos, radius, vel, config.material);
            registry.insert(
                g.key,
                RegisteredBody {
                    handle,
                    radius,
                    color: g.color,
                },
            );
        }
        log::info!("[sim] arena {}x{} with {} bodies", w, h, registry.len());

        Self {
            catalog,
            config,
            world: Some(world),
            walls,
            registry,
            rng,
            running: true,
        }
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Arena size in pixels.
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn body_count(&self) -> usize {
        self.registry.len()
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn body(&self, key: &str) -> Option<SimBody> {
        let world = self.world.as_ref()?;
        let genre = find(self.catalog, key)?;
        let entry = self.registry.get(key)?;
        Some(SimBody {
            genre_key: genre.key,
            position: world.position(entry.handle)?,
            velocity: world.velocity(entry.handle)?,
            radius: entry.radius,
            color: entry.color,
        })
    }

    /// Live bodies in catalog order.
    pub fn bodies(&self) -> impl Iterator<Item = SimBody> + '_ {
        self.catalog.iter().filter_map(|g| self.body(g.key))
    }

    pub fn set_velocity(&mut self, key: &str, velocity: Vec2) {
        if let (Some(world), Some(entry)) = (self.world.as_mut(), self.registry.get(key)) {
            world.set_velocity(entry.handle, velocity);
        }
    }

    /// Replace the body for `key` with one of `radius`, keeping position and
    /// velocity. Shapes are fixed at creation, so resizing means a new body.
    pub fn resize(&mut self, key: &str, radius: f32) -> Option<SimBody> {
        let world = self.world.as_mut()?;
        let old = *self.registry.get(key)?;
        let position = world.position(old.handle)?;
        let velocity = world.velocity(old.handle)?;
        let handle = world.add_circle(position, radius, velocity, self.config.material);
        self.registry.replace(
            key,
            RegisteredBody {
                handle,
                radius,
                color: old.color,
            },
        );
        world.remove(old.handle);
        log::debug!("[sim] resized `{}` {:.1} -> {:.1}", key, old.radius, radius);
        self.body(key)
    }

    /// First body (catalog order) whose circle contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<&'static str> {
        self.bodies()
            .find(|b| b.position.distance_squared(point) <= b.radius * b.radius)
            .map(|b| b.genre_key)
    }

    /// Closest other body by centre distance; ties go to the earlier
    /// catalog entry.
    pub fn nearest_other(&self, key: &str) -> Option<SimBody> {
        let from = self.body(key)?;
        let mut best: Option<(SimBody, f32)> = None;
        for b in self.bodies().filter(|b| b.genre_key != key) {
            let d2 = b.position.distance_squared(from.position);
            match best {
                Some((_, bd2)) if d2 >= bd2 => {}
                _ => best = Some((b, d2)),
            }
        }
        best.map(|(b, _)| b)
    }

    /// Advance one tick, then nudge idle bodies. Returns how many were
    /// nudged.
    pub fn step(&mut self) -> usize {
        if !self.running {
            return 0;
        }
        let Some(world) = self.world.as_mut() else {
            return 0;
        };
        world.step();

        let mut nudged = 0;
        for handle in self.registry.handles() {
            let v = world.velocity(handle).unwrap_or(Vec2::ZERO);
            if v.length_squared() < self.config.idle_speed_sq {
                let kick = random_direction(&mut self.rng) * self.config.nudge_speed;
                world.set_velocity(handle, kick);
                nudged += 1;
            }
        }
        nudged
    }

    /// Stop ticking, drop every body and wall, release the world.
    pub fn teardown(&mut self) {
        if !self.running && self.world.is_none() {
            return;
        }
        self.running = false;
        if let Some(mut world) = self.world.take() {
            world.clear();
        }
        self.registry.clear();
        self.walls.clear();
        log::info!("[sim] torn down");
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.teardown();
    }
}
