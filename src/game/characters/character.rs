// The player character

use glam::Vec2;

use crate::engine::input::ControlIntent;
use crate::game::entities::PlatformId;

use super::state::{CharacterState, CharacterStateMachine};
use super::stats::CharacterStats;

/// What a grounded character is standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Platform(PlatformId),
    Ground,
}

/// The player-controlled character
#[derive(Debug)]
pub struct Character {
    /// Top-left corner of the collision box
    pub position: Vec2,
    /// Units per tick; positive y is down
    pub velocity: Vec2,
    /// Character properties
    pub stats: CharacterStats,

    state_machine: CharacterStateMachine,
    /// Jumps used since the last landing
    jump_count: u8,
    /// Jumps allowed between landings
    max_jumps: u8,
    /// Only set while grounded
    support: Option<Support>,
    /// Direction character is facing (1 = right, -1 = left)
    facing_direction: f32,
}

impl Character {
    /// Create a character at rest at the spawn point
    pub fn new(spawn: Vec2, stats: CharacterStats) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            max_jumps: stats.max_jumps,
            stats,
            state_machine: CharacterStateMachine::new(),
            jump_count: 0,
            support: None,
            facing_direction: 1.0,
        }
    }

    /// Map this tick's control intent onto velocity.
    /// Returns true if a jump impulse was applied.
    pub fn apply_intent(&mut self, intent: &ControlIntent) -> bool {
        if !self.is_alive() {
            return false;
        }

        let direction = intent.move_direction.sign();
        self.velocity.x = direction * self.stats.move_speed;
        if direction != 0.0 {
            self.facing_direction = direction;
        }

        intent.jump && self.try_jump()
    }

    /// Attempt to jump (checks if jump is allowed)
    pub fn try_jump(&mut self) -> bool {
        if !self.is_alive() || self.jump_count >= self.max_jumps {
            return false;
        }

        // Re-arm rather than accumulate: a double jump replaces the current
        // vertical velocity
        self.velocity.y = self.stats.jump_impulse;
        self.jump_count += 1;
        self.support = None;
        self.state_machine.leave_ground();
        true
    }

    /// Stand on `support`. Returns true if the support changed, which is when
    /// the landing is worth reporting.
    pub fn land(&mut self, support: Support) -> bool {
        if !self.is_alive() {
            return false;
        }

        let changed = self.support != Some(support);
        self.velocity.y = 0.0;
        self.jump_count = 0;
        self.support = Some(support);
        self.state_machine.land();
        changed
    }

    /// Nothing underneath any more
    pub fn leave_ground(&mut self) {
        self.support = None;
        self.state_machine.leave_ground();
    }

    /// Kill the character
    pub fn die(&mut self) -> bool {
        self.support = None;
        self.velocity = Vec2::ZERO;
        self.state_machine.die()
    }

    /// Reset position, velocity, jumps and state to spawn defaults
    pub fn respawn(&mut self, spawn: Vec2) {
        self.position = spawn;
        self.velocity = Vec2::ZERO;
        self.jump_count = 0;
        self.max_jumps = self.stats.max_jumps;
        self.support = None;
        self.facing_direction = 1.0;
        self.state_machine.respawn();
    }

    /// Allow a second jump until the next respawn
    pub fn enable_double_jump(&mut self) {
        self.max_jumps = self.max_jumps.max(self.stats.double_jump_max_jumps);
    }

    /// Advance per-tick bookkeeping
    pub fn tick(&mut self) {
        self.state_machine.tick();
    }

    pub fn jump_count(&self) -> u8 {
        self.jump_count
    }

    pub fn max_jumps(&self) -> u8 {
        self.max_jumps
    }

    pub fn support(&self) -> Option<Support> {
        self.support
    }

    /// Platform the character stands on; `None` on the ground or in the air
    pub fn attached_platform(&self) -> Option<PlatformId> {
        match self.support {
            Some(Support::Platform(id)) => Some(id),
            _ => None,
        }
    }

    pub fn facing_direction(&self) -> f32 {
        self.facing_direction
    }

    pub fn state(&self) -> CharacterState {
        self.state_machine.state()
    }

    pub fn state_machine(&self) -> &CharacterStateMachine {
        &self.state_machine
    }

    /// Check if character is alive
    pub fn is_alive(&self) -> bool {
        self.state().is_alive()
    }
}
