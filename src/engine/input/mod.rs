// Input handling system
//
// Keyboard events become either character intent or driver commands.
//
// ## Architecture
//
// - `action`: game actions and default key bindings
// - `config`: rebindable key-to-action table
// - `mapper`: press/release edges to a per-tick `ControlIntent`
// - `manager`: winit keyboard events routed through the config
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputManager};
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per simulation tick
// let intent = input.take_intent();
// for command in input.drain_commands() {
//     if command == Action::Restart { /* ... */ }
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod mapper;

#[allow(unused_imports)]
pub use action::{Action, InputSource};
#[allow(unused_imports)]
pub use config::InputConfig;
#[allow(unused_imports)]
pub use manager::InputManager;
#[allow(unused_imports)]
pub use mapper::{ControlIntent, InputMapper, MoveDirection};
