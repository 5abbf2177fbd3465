// Level geometry store
//
// A `Level` is immutable once built. Enemies and collectibles are stored as
// spawn descriptions; the world seeds live copies from them on every
// (re)start.

pub mod builtin;

use std::collections::HashSet;

use glam::Vec2;

use crate::core::Aabb;
use crate::game::entities::{
    CollectibleKind, CollectibleSpawn, EnemySpawn, Platform, PlatformId,
};

/// Where the character appears on (re)start
pub const DEFAULT_SPAWN: Vec2 = Vec2::new(50.0, 300.0);

/// Characters whose top edge passes this y are lost
pub const VOID_THRESHOLD: f32 = 400.0;

/// Level validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Invalid {kind} {id} size: {width}x{height}")]
    InvalidSize {
        kind: &'static str,
        id: u32,
        width: f32,
        height: f32,
    },

    #[error("Non-finite coordinates on {kind} {id}")]
    NonFinite { kind: &'static str, id: u32 },

    #[error("Enemy {id} has a negative patrol range: {range}")]
    NegativeRange { id: u32, range: f32 },

    #[error("Enemy {id} has a negative patrol speed: {speed}")]
    NegativeSpeed { id: u32, speed: f32 },

    #[error("Level '{0}' has no goal")]
    MissingGoal(String),
}

/// Read-only level description
#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    spawn: Vec2,
    platforms: Vec<Platform>,
    enemies: Vec<EnemySpawn>,
    collectibles: Vec<CollectibleSpawn>,
    goal: Aabb,
    ground_level: Option<f32>,
    void_threshold: f32,
}

impl Level {
    pub fn builder(name: &str) -> LevelBuilder {
        LevelBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Platforms in level order; collision tests walk them in this order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemy_spawns(&self) -> &[EnemySpawn] {
        &self.enemies
    }

    pub fn collectible_spawns(&self) -> &[CollectibleSpawn] {
        &self.collectibles
    }

    pub fn goal(&self) -> &Aabb {
        &self.goal
    }

    /// Y of the infinite floor, if the level has one
    pub fn ground_level(&self) -> Option<f32> {
        self.ground_level
    }

    pub fn void_threshold(&self) -> f32 {
        self.void_threshold
    }
}

/// Builder for levels; `build` validates the result
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    name: String,
    spawn: Vec2,
    platforms: Vec<Platform>,
    enemies: Vec<EnemySpawn>,
    collectibles: Vec<CollectibleSpawn>,
    goal: Option<Aabb>,
    ground_level: Option<f32>,
    void_threshold: f32,
}

impl LevelBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            spawn: DEFAULT_SPAWN,
            platforms: Vec::new(),
            enemies: Vec::new(),
            collectibles: Vec::new(),
            goal: None,
            ground_level: None,
            void_threshold: VOID_THRESHOLD,
        }
    }

    pub fn spawn(mut self, x: f32, y: f32) -> Self {
        self.spawn = Vec2::new(x, y);
        self
    }

    pub fn platform(mut self, id: PlatformId, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.platforms.push(Platform::new(id, x, y, width, height));
        self
    }

    pub fn enemy(mut self, spawn: EnemySpawn) -> Self {
        self.enemies.push(spawn);
        self
    }

    pub fn collectible(mut self, id: u32, x: f32, y: f32, kind: CollectibleKind) -> Self {
        self.collectibles.push(CollectibleSpawn { id, x, y, kind });
        self
    }

    pub fn goal(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.goal = Some(Aabb::new(x, y, width, height));
        self
    }

    pub fn ground_level(mut self, y: f32) -> Self {
        self.ground_level = Some(y);
        self
    }

    pub fn build(self) -> Result<Level, LevelError> {
        let goal = self.goal.ok_or_else(|| LevelError::MissingGoal(self.name.clone()))?;

        let mut seen = HashSet::new();
        for platform in &self.platforms {
            check_box("platform", platform.id, &platform.bounds)?;
            if !seen.insert(platform.id) {
                return Err(LevelError::DuplicateId {
                    kind: "platform",
                    id: platform.id,
                });
            }
        }

        seen.clear();
        for enemy in &self.enemies {
            let bounds = Aabb::new(enemy.x, enemy.y, enemy.width, enemy.height);
            check_box("enemy", enemy.id, &bounds)?;
            if !enemy.range.is_finite() || !enemy.speed.is_finite() {
                return Err(LevelError::NonFinite {
                    kind: "enemy",
                    id: enemy.id,
                });
            }
            if enemy.range < 0.0 {
                return Err(LevelError::NegativeRange {
                    id: enemy.id,
                    range: enemy.range,
                });
            }
            if enemy.speed < 0.0 {
                return Err(LevelError::NegativeSpeed {
                    id: enemy.id,
                    speed: enemy.speed,
                });
            }
            if !seen.insert(enemy.id) {
                return Err(LevelError::DuplicateId {
                    kind: "enemy",
                    id: enemy.id,
                });
            }
        }

        seen.clear();
        for item in &self.collectibles {
            if !item.x.is_finite() || !item.y.is_finite() {
                return Err(LevelError::NonFinite {
                    kind: "collectible",
                    id: item.id,
                });
            }
            if !seen.insert(item.id) {
                return Err(LevelError::DuplicateId {
                    kind: "collectible",
                    id: item.id,
                });
            }
        }

        check_box("goal", 0, &goal)?;

        Ok(Level {
            name: self.name,
            spawn: self.spawn,
            platforms: self.platforms,
            enemies: self.enemies,
            collectibles: self.collectibles,
            goal,
            ground_level: self.ground_level,
            void_threshold: self.void_threshold,
        })
    }
}

fn check_box(kind: &'static str, id: u32, bounds: &Aabb) -> Result<(), LevelError> {
    if !bounds.is_finite() {
        return Err(LevelError::NonFinite { kind, id });
    }
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Err(LevelError::InvalidSize {
            kind,
            id,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}
