// Read-only views of the world for the presentation layer

use glam::Vec2;

use crate::game::characters::CharacterState;
use crate::game::entities::{Collectible, Enemy, PlatformId};

use super::events::GameEvent;

/// Per-tick summary handed to the presentation/score layer
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub state: CharacterState,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn died(&self) -> bool {
        self.events.iter().any(GameEvent::is_death)
    }

    pub fn reached_goal(&self) -> bool {
        self.events.contains(&GameEvent::ReachedGoal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub state: CharacterState,
    pub jump_count: u8,
    pub max_jumps: u8,
    pub attached_platform: Option<PlatformId>,
    /// 1 facing right, -1 facing left
    pub facing_direction: f32,
}

/// Owned copy of the mutable world state between ticks
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub character: CharacterSnapshot,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
}

impl WorldSnapshot {
    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.is_collected()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::DeathCause;

    fn report(events: Vec<GameEvent>) -> TickReport {
        TickReport {
            tick: 1,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            state: CharacterState::Airborne,
            events,
        }
    }

    #[test]
    fn test_report_queries() {
        assert!(!report(vec![]).died());
        assert!(report(vec![GameEvent::CharacterDied(DeathCause::Void)]).died());
        assert!(report(vec![GameEvent::HitGround, GameEvent::ReachedGoal]).reached_goal());
        assert!(!report(vec![GameEvent::KilledEnemy(2)]).reached_goal());
    }
}
