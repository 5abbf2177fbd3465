// Input manager - routes window keyboard events to the mapper and command queue

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::mapper::{ControlIntent, InputMapper};
use std::collections::VecDeque;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Owns the key bindings and turns key events into character intent and
/// driver commands
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    mapper: InputMapper,
    /// Command actions pressed since the driver last drained them
    commands: VecDeque<Action>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            mapper: InputMapper::new(),
            commands: VecDeque::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(action) = self.config.action_for(InputSource::key(key_code)) else {
            return;
        };

        match event.state {
            // OS key repeat is never a new press
            ElementState::Pressed if !event.repeat => self.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.release(action),
        }
    }

    /// Register a press of an already-resolved action
    pub fn press(&mut self, action: Action) {
        if action.is_movement() {
            self.mapper.press(action);
        } else {
            log::debug!("Command queued: {:?}", action);
            self.commands.push_back(action);
        }
    }

    /// Register a release of an already-resolved action
    pub fn release(&mut self, action: Action) {
        if action.is_movement() {
            self.mapper.release(action);
        }
    }

    /// Intent for the next tick; consumes the pending jump
    pub fn take_intent(&mut self) -> ControlIntent {
        self.mapper.take_intent()
    }

    /// Commands in the order they were pressed
    pub fn drain_commands(&mut self) -> Vec<Action> {
        self.commands.drain(..).collect()
    }

    /// Forget held keys, pending jumps and queued commands
    pub fn reset(&mut self) {
        self.mapper.reset();
        self.commands.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
