// Events emitted by a simulation tick

use crate::game::entities::{CollectibleId, CollectibleKind, EnemyId, PlatformId};

/// Why the character died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Fell past the level's void threshold
    Void,
    /// Touched a live enemy without stomping it
    Enemy(EnemyId),
}

/// Outcome of one tick, in precedence order: death, stomp, landing, pickup, goal.
///
/// `LandedOnPlatform` and `HitGround` fire when the character's support
/// changes (touching down from the air, or stepping onto another platform).
/// Standing on the same support for further ticks emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LandedOnPlatform(PlatformId),
    HitGround,
    KilledEnemy(EnemyId),
    CharacterDied(DeathCause),
    CollectedItem {
        id: CollectibleId,
        kind: CollectibleKind,
    },
    ReachedGoal,
}

impl GameEvent {
    pub fn is_death(&self) -> bool {
        matches!(self, Self::CharacterDied(_))
    }
}
