// Patrolling enemies

use crate::core::math::clamp;
use crate::core::Aabb;

/// Level-scoped enemy identifier
pub type EnemyId = u32;

pub const ENEMY_SIZE: f32 = 30.0;
pub const DEFAULT_PATROL_SPEED: f32 = 2.0;
pub const DEFAULT_PATROL_RANGE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolDirection {
    Left,
    #[default]
    Right,
}

impl PatrolDirection {
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Enemy as described by level data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub id: EnemyId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance the enemy may wander either side of its spawn x
    pub range: f32,
    /// Units per tick
    pub speed: f32,
    pub direction: PatrolDirection,
}

impl EnemySpawn {
    /// Spawn with the default size and patrol
    pub fn new(id: EnemyId, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            range: DEFAULT_PATROL_RANGE,
            speed: DEFAULT_PATROL_SPEED,
            direction: PatrolDirection::Right,
        }
    }

    pub fn patrol(mut self, range: f32, speed: f32, direction: PatrolDirection) -> Self {
        self.range = range;
        self.speed = speed;
        self.direction = direction;
        self
    }
}

/// Live enemy for one level attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    bounds: Aabb,
    alive: bool,
    patrol_origin: f32,
    range: f32,
    speed: f32,
    direction: PatrolDirection,
}

impl Enemy {
    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        Self {
            id: spawn.id,
            bounds: Aabb::new(spawn.x, spawn.y, spawn.width, spawn.height),
            alive: true,
            patrol_origin: spawn.x,
            range: spawn.range,
            speed: spawn.speed,
            direction: spawn.direction,
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Leftmost and rightmost x the patrol may reach
    pub fn patrol_bounds(&self) -> (f32, f32) {
        (self.patrol_origin - self.range, self.patrol_origin + self.range)
    }

    /// Advance one tick of patrol. Dead enemies stay where they died.
    pub fn patrol(&mut self) {
        if !self.alive {
            return;
        }

        let (min_x, max_x) = self.patrol_bounds();
        let next_x = self.bounds.x + self.direction.sign() * self.speed;
        self.bounds.x = clamp(next_x, min_x, max_x);

        if next_x <= min_x {
            self.direction = PatrolDirection::Right;
        } else if next_x >= max_x {
            self.direction = PatrolDirection::Left;
        }
    }

    /// Kill the enemy. Returns true only for the alive-to-dead transition.
    pub fn kill(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}
