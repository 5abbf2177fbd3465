// Physics constants
//
// Units are world units and ticks. Every tolerance is measured downward from
// the top edge of the surface being tested.

/// Added to vertical velocity once per tick
pub const GRAVITY: f32 = 1.0;

/// Maximum downward speed (units/tick)
pub const TERMINAL_VELOCITY: f32 = 10.0;

/// Depth of the band below a platform's top edge that still counts as a landing
pub const LANDING_TOLERANCE: f32 = 10.0;

/// Depth of the band below an enemy's top edge that counts as a stomp
pub const STOMP_TOLERANCE: f32 = 10.0;

/// Tunable physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub landing_tolerance: f32,
    pub stomp_tolerance: f32,
}

pub const BASE_TUNING: PhysicsTuning = PhysicsTuning {
    gravity: GRAVITY,
    terminal_velocity: TERMINAL_VELOCITY,
    landing_tolerance: LANDING_TOLERANCE,
    stomp_tolerance: STOMP_TOLERANCE,
};

impl Default for PhysicsTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

impl PhysicsTuning {
    /// Names of the tolerance bands a body at terminal velocity can step past
    /// in a single tick.
    ///
    /// Such a tuning is legal but a falling character may skip a landing or a
    /// stomp and fall through the platform or die on the enemy instead.
    pub fn skippable_bands(&self) -> Vec<&'static str> {
        let mut bands = Vec::new();
        if self.landing_tolerance < self.terminal_velocity {
            bands.push("landing_tolerance");
        }
        if self.stomp_tolerance < self.terminal_velocity {
            bands.push("stomp_tolerance");
        }
        bands
    }
}
