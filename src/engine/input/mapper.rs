// Edge-to-intent mapping for the character controls

use super::action::Action;

/// Horizontal direction the player is steering in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveDirection {
    /// -1, 0 or 1
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Idle => 0.0,
            Self::Right => 1.0,
        }
    }
}

/// Control input consumed by exactly one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlIntent {
    pub move_direction: MoveDirection,
    /// A fresh jump press that has not been consumed yet
    pub jump: bool,
}

// Shorthands for driving the simulation directly
#[cfg(test)]
impl ControlIntent {
    pub const IDLE: ControlIntent = ControlIntent {
        move_direction: MoveDirection::Idle,
        jump: false,
    };

    pub fn moving(move_direction: MoveDirection) -> Self {
        Self {
            move_direction,
            jump: false,
        }
    }

    pub fn jumping(move_direction: MoveDirection) -> Self {
        Self {
            move_direction,
            jump: true,
        }
    }
}

/// Turns press/release edges into a [`ControlIntent`].
///
/// Direction follows the most recent press; releasing that key stops the
/// character even if the opposite key is still down. A jump press arms exactly
/// one jump, which stays armed until a tick takes it. Further presses are
/// ignored until the key is released.
#[derive(Debug, Default)]
pub struct InputMapper {
    left_held: bool,
    right_held: bool,
    direction: MoveDirection,
    jump_held: bool,
    jump_requested: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press edge. Returns false for repeats and non-movement actions.
    pub fn press(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft if !self.left_held => {
                self.left_held = true;
                self.direction = MoveDirection::Left;
                true
            }
            Action::MoveRight if !self.right_held => {
                self.right_held = true;
                self.direction = MoveDirection::Right;
                true
            }
            Action::Jump if !self.jump_held => {
                self.jump_held = true;
                self.jump_requested = true;
                true
            }
            _ => false,
        }
    }

    /// Register a release edge. Returns false if the action was not held.
    pub fn release(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft if self.left_held => {
                self.left_held = false;
                if self.direction == MoveDirection::Left {
                    self.direction = MoveDirection::Idle;
                }
                true
            }
            Action::MoveRight if self.right_held => {
                self.right_held = false;
                if self.direction == MoveDirection::Right {
                    self.direction = MoveDirection::Idle;
                }
                true
            }
            Action::Jump if self.jump_held => {
                self.jump_held = false;
                true
            }
            _ => false,
        }
    }

    /// Current intent without consuming the pending jump
    pub fn peek(&self) -> ControlIntent {
        ControlIntent {
            move_direction: self.direction,
            jump: self.jump_requested,
        }
    }

    /// Current intent; the pending jump is consumed
    pub fn take_intent(&mut self) -> ControlIntent {
        let intent = self.peek();
        self.jump_requested = false;
        intent
    }

    /// Forget all held keys and pending jumps
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.take_intent(), ControlIntent::IDLE);
    }

    #[test]
    fn test_hold_and_release_direction() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::MoveRight);
        assert_eq!(mapper.take_intent().move_direction, MoveDirection::Right);
        // Direction is level-triggered: still held next tick
        assert_eq!(mapper.take_intent().move_direction, MoveDirection::Right);

        mapper.release(Action::MoveRight);
        assert_eq!(mapper.take_intent().move_direction, MoveDirection::Idle);
    }

    #[test]
    fn test_releasing_held_direction_stops() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::MoveLeft);
        mapper.press(Action::MoveRight);
        assert_eq!(mapper.peek().move_direction, MoveDirection::Right);

        // Left is still down but does not take over
        mapper.release(Action::MoveRight);
        assert_eq!(mapper.peek().move_direction, MoveDirection::Idle);

        mapper.release(Action::MoveLeft);
        assert_eq!(mapper.peek().move_direction, MoveDirection::Idle);

        // A fresh press is needed to move again
        mapper.press(Action::MoveLeft);
        assert_eq!(mapper.peek().move_direction, MoveDirection::Left);
    }

    #[test]
    fn test_releasing_other_key_keeps_direction() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::MoveLeft);
        mapper.press(Action::MoveRight);
        mapper.release(Action::MoveLeft);
        assert_eq!(mapper.peek().move_direction, MoveDirection::Right);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut mapper = InputMapper::new();
        assert!(mapper.press(Action::Jump));
        assert!(mapper.take_intent().jump);

        // Key still held: no new jumps, even with repeats
        assert!(!mapper.press(Action::Jump));
        assert!(!mapper.take_intent().jump);
        assert!(!mapper.take_intent().jump);

        mapper.release(Action::Jump);
        assert!(mapper.press(Action::Jump));
        assert!(mapper.take_intent().jump);
    }

    #[test]
    fn test_jump_press_survives_release_before_tick() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::Jump);
        mapper.release(Action::Jump);
        assert!(mapper.take_intent().jump);
        assert!(!mapper.take_intent().jump);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::Jump);
        assert!(mapper.peek().jump);
        assert!(mapper.peek().jump);
        assert!(mapper.take_intent().jump);
    }

    #[test]
    fn test_commands_are_ignored() {
        let mut mapper = InputMapper::new();
        assert!(!mapper.press(Action::Restart));
        assert!(!mapper.release(Action::Pause));
        assert_eq!(mapper.peek(), ControlIntent::IDLE);
    }

    #[test]
    fn test_release_without_press() {
        let mut mapper = InputMapper::new();
        assert!(!mapper.release(Action::MoveLeft));
        assert!(!mapper.release(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut mapper = InputMapper::new();
        mapper.press(Action::MoveLeft);
        mapper.press(Action::Jump);
        mapper.reset();
        assert_eq!(mapper.peek(), ControlIntent::IDLE);
        // Jump key counts as released after a reset
        assert!(mapper.press(Action::Jump));
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(MoveDirection::Left.sign(), -1.0);
        assert_eq!(MoveDirection::Idle.sign(), 0.0);
        assert_eq!(MoveDirection::Right.sign(), 1.0);
    }
}
