// Character state machine

/// Represents the current state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing on a platform or the ground
    #[default]
    Grounded,
    /// In the air, rising or falling
    Airborne,
    /// Killed by an enemy or the void; terminal until respawn
    Dead,
}

impl CharacterState {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self, Self::Dead)
    }

    /// Short lowercase name, used in logs and the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grounded => "grounded",
            Self::Airborne => "airborne",
            Self::Dead => "dead",
        }
    }
}

/// State machine that handles character state transitions
#[derive(Debug)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    previous_state: CharacterState,
    ticks_in_state: u32,
}

impl Default for CharacterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: CharacterState::Grounded,
            previous_state: CharacterState::Grounded,
            ticks_in_state: 0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> CharacterState {
        self.previous_state
    }

    /// Check if state changed during the last tick
    pub fn state_just_changed(&self) -> bool {
        self.ticks_in_state == 0
    }

    /// Transition to a new state; a no-op when already there
    fn transition(&mut self, new_state: CharacterState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.ticks_in_state = 0;
        true
    }

    /// Advance the per-state tick counter (called once per simulation tick)
    pub fn tick(&mut self) {
        self.ticks_in_state = self.ticks_in_state.saturating_add(1);
    }

    /// Called when the character leaves the ground by jumping or walking off.
    /// Returns true if the state changed.
    pub fn leave_ground(&mut self) -> bool {
        if self.current_state.is_grounded() {
            self.transition(CharacterState::Airborne)
        } else {
            false
        }
    }

    /// Called when the character lands on a platform or the ground.
    /// Returns true if the state changed.
    pub fn land(&mut self) -> bool {
        if self.current_state.is_airborne() {
            self.transition(CharacterState::Grounded)
        } else {
            false
        }
    }

    /// Kill the character
    pub fn die(&mut self) -> bool {
        self.transition(CharacterState::Dead)
    }

    /// Reset to the spawn state, whatever the current state is
    pub fn respawn(&mut self) {
        self.previous_state = self.current_state;
        self.current_state = CharacterState::Grounded;
        self.ticks_in_state = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sm = CharacterStateMachine::new();
        assert_eq!(sm.state(), CharacterState::Grounded);
        assert!(sm.state_just_changed());
    }

    #[test]
    fn test_leave_ground() {
        let mut sm = CharacterStateMachine::new();
        assert!(sm.leave_ground());
        assert_eq!(sm.state(), CharacterState::Airborne);
        assert_eq!(sm.previous_state(), CharacterState::Grounded);
        assert!(!sm.leave_ground(), "Already airborne");
    }

    #[test]
    fn test_land() {
        let mut sm = CharacterStateMachine::new();
        assert!(!sm.land(), "Landing while grounded is not a transition");
        sm.leave_ground();
        assert!(sm.land());
        assert_eq!(sm.state(), CharacterState::Grounded);
    }

    #[test]
    fn test_tick_counter() {
        let mut sm = CharacterStateMachine::new();
        sm.leave_ground();
        assert!(sm.state_just_changed());
        sm.tick();
        assert!(!sm.state_just_changed());
        // A refused transition leaves the counter alone
        assert!(!sm.leave_ground());
        assert!(!sm.state_just_changed());
    }

    #[test]
    fn test_death_is_terminal() {
        let mut sm = CharacterStateMachine::new();
        assert!(sm.die());
        assert!(!sm.state().is_alive());
        assert!(!sm.land());
        assert!(!sm.leave_ground());
        assert_eq!(sm.state(), CharacterState::Dead);
    }

    #[test]
    fn test_respawn() {
        let mut sm = CharacterStateMachine::new();
        sm.leave_ground();
        sm.die();
        sm.tick();
        sm.respawn();
        assert_eq!(sm.state(), CharacterState::Grounded);
        assert_eq!(sm.previous_state(), CharacterState::Dead);
        assert!(sm.state_just_changed());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(CharacterState::Grounded.name(), "grounded");
        assert_eq!(CharacterState::Airborne.name(), "airborne");
        assert_eq!(CharacterState::Dead.name(), "dead");
    }
}
