// Kinematic integrator

use glam::Vec2;

use super::tuning::PhysicsTuning;

/// Tentative body state after one tick, before collision resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Apply one tick of gravity, capped at terminal velocity
pub fn apply_gravity(velocity_y: f32, tuning: &PhysicsTuning) -> f32 {
    (velocity_y + tuning.gravity).min(tuning.terminal_velocity)
}

/// Advance a body by one tick.
///
/// Gravity is applied first so the position moves with the updated velocity.
/// Horizontal velocity passes through untouched.
pub fn integrate(position: Vec2, velocity: Vec2, tuning: &PhysicsTuning) -> Integration {
    let velocity = Vec2::new(velocity.x, apply_gravity(velocity.y, tuning));
    Integration {
        position: position + velocity,
        velocity,
    }
}
