// Collectible pickups

use crate::core::Aabb;

/// Level-scoped collectible identifier
pub type CollectibleId = u32;

pub const COLLECTIBLE_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    /// Worth points
    Score,
    /// Unlocks a second jump until the character respawns
    DoubleJump,
}

/// Collectible as described by level data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectibleSpawn {
    pub id: CollectibleId,
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

/// Live collectible for one level attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub id: CollectibleId,
    pub bounds: Aabb,
    pub kind: CollectibleKind,
    collected: bool,
}

impl Collectible {
    pub fn from_spawn(spawn: &CollectibleSpawn) -> Self {
        Self {
            id: spawn.id,
            bounds: Aabb::new(spawn.x, spawn.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
            kind: spawn.kind,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark as collected. Returns true only the first time.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}
