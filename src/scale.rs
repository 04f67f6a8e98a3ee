//! Radius-multiplier animation for the scaling variant.
//!
//! A pointer press gives each body a fresh random `scale_target`; every frame
//! the body's `scale_factor` eases toward it with a first-order exponential
//! approach, snapping when a step would overshoot. The same factor drives both
//! the collision radius and the rendered radius, so visual and physical size
//! never disagree.

use rand::Rng;

use crate::physics::PendulumBody;

pub const SCALE_MIN: f32 = 0.6;
pub const SCALE_MAX: f32 = 1.6;
/// Easing rate in 1/s; larger approaches the target faster.
pub const SCALE_LERP: f32 = 4.0;

/// Pick a new random target multiplier in `[SCALE_MIN, SCALE_MAX]`.
pub fn randomize_target<R: Rng>(body: &mut PendulumBody, rng: &mut R) {
    let target = SCALE_MIN + rng.random::<f32>() * (SCALE_MAX - SCALE_MIN);
    body.scale_target = target.clamp(SCALE_MIN, SCALE_MAX);
}

/// Ease `scale_factor` toward `scale_target` by one frame of `dt` seconds.
pub fn animate(body: &mut PendulumBody, dt: f32) {
    let diff = body.scale_target - body.scale_factor;
    let step = diff * SCALE_LERP * dt;

    if step.abs() >= diff.abs() {
        body.scale_factor = body.scale_target;
    } else {
        body.scale_factor += step;
    }
    body.scale_factor = body.scale_factor.clamp(SCALE_MIN, SCALE_MAX);
}
