// Physics system: fixed-step kinematics and AABB contact tests
//
// Everything here is unit-per-tick and deterministic. Entity bookkeeping (which
// platform, which enemy) lives in the game layer; this module only answers
// geometric questions about boxes and velocities.

pub mod collision;
pub mod integrator;
pub mod tuning;

#[allow(unused_imports)]
pub use collision::{classify_enemy_contact, lands_on, EnemyContact};
#[allow(unused_imports)]
pub use integrator::{apply_gravity, integrate, Integration};
#[allow(unused_imports)]
pub use tuning::{PhysicsTuning, BASE_TUNING};
