// Character stats - the one player character's fixed movement profile

/// Fixed character stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    // Movement
    /// Horizontal speed while a direction is held (units/tick)
    pub move_speed: f32,
    /// Vertical velocity set by a jump; negative is up
    pub jump_impulse: f32,
    /// Jumps allowed between landings
    pub max_jumps: u8,
    /// Jumps allowed once a double-jump pickup is collected
    pub double_jump_max_jumps: u8,

    // Dimensions (collision box)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

pub const JUMP_IMPULSE: f32 = -15.0;

pub const BASE_STATS: CharacterStats = CharacterStats {
    move_speed: 5.0,
    jump_impulse: JUMP_IMPULSE,
    max_jumps: 1,
    double_jump_max_jumps: 2,

    width: 30.0,
    height: 50.0,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}
