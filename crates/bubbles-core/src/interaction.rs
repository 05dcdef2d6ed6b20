//! Pointer handling: kick, vote and resize on press, plus drag-and-fling.

use crate::constants::{
    DRAG_STIFFNESS, KICK_BASE, KICK_JITTER_RAD, KICK_SCALE_MIN, KICK_SCALE_REF_RADIUS, KICK_VARIANCE,
};
use crate::radius::radius_for_votes;
use crate::sim::{random_direction, Simulation};
use crate::storage::KeyValueStore;
use crate::votes::VoteStore;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoteOutcome {
    pub genre_key: &'static str,
    pub votes: u32,
    pub radius: f32,
}

/// A bubble held by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub genre_key: &'static str,
    pub target: Vec2,
}

/// Velocity (pixels per tick) that pulls a held body toward the pointer.
#[inline]
pub fn drag_velocity(from: Vec2, target: Vec2) -> Vec2 {
    (target - from) * DRAG_STIFFNESS
}

/// Smaller bubbles get proportionally larger kicks.
#[inline]
pub fn kick_size_scale(radius: f32) -> f32 {
    (KICK_SCALE_REF_RADIUS / (radius + 1.0)).max(KICK_SCALE_MIN)
}

/// Unit direction toward `target` with angular jitter, or a random one when
/// there is no usable target.
pub fn kick_direction(rng: &mut impl Rng, from: Vec2, target: Option<Vec2>) -> Vec2 {
    match target.and_then(|t| (t - from).try_normalize()) {
        Some(dir) => {
            let jitter = rng.gen_range(-KICK_JITTER_RAD..=KICK_JITTER_RAD);
            Vec2::from_angle(jitter).rotate(dir)
        }
        None => random_direction(rng),
    }
}

pub fn kick_velocity(rng: &mut impl Rng, from: Vec2, target: Option<Vec2>, radius: f32) -> Vec2 {
    let dir = kick_direction(rng, from, target);
    let speed = (KICK_BASE + rng.gen::<f32>() * KICK_VARIANCE) * kick_size_scale(radius);
    dir * speed
}

/// Resolve a pointer-down at `point` into a vote.
///
/// Returns `None` when nothing was hit.
pub fn handle_pointer_down<S: KeyValueStore>(
    sim: &mut Simulation,
    votes: &mut VoteStore<S>,
    point: Vec2,
) -> Option<VoteOutcome> {
    let key = sim.hit_test(point)?;
    let body = sim.body(key)?;

    let target = sim.nearest_other(key).map(|b| b.position);
    let kick = kick_velocity(sim.rng(), body.position, target, body.radius);
    sim.set_velocity(key, body.velocity + kick);

    let count = votes.increment(key)?;
    let radius = radius_for_votes(count);
    sim.resize(key, radius)?;

    log::info!("[vote] {} -> {} (r={:.1})", key, count, radius);
    Some(VoteOutcome {
        genre_key: key,
        votes: count,
        radius,
    })
}

/// Steer the held body toward its target for the coming tick.
///
/// Returns false once the body no longer exists.
pub fn apply_drag(sim: &mut Simulation, drag: &Drag) -> bool {
    let Some(body) = sim.body(drag.genre_key) else {
        return false;
    };
    sim.set_velocity(drag.genre_key, drag_velocity(body.position, drag.target));
    true
}
