// Character system
//
// This module contains everything related to the playable character:
// - Character data, jumping and landing
// - Character stats and properties
// - State machine for grounded / airborne / dead

pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
#[allow(unused_imports)]
pub use character::{Character, Support};
#[allow(unused_imports)]
pub use state::{CharacterState, CharacterStateMachine};
#[allow(unused_imports)]
pub use stats::{CharacterStats, BASE_STATS};
