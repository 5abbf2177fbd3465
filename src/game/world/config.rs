// World configuration

use crate::engine::physics::PhysicsTuning;
use crate::game::characters::CharacterStats;

/// How the resolver treats several enemies touching the character in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyContactPolicy {
    /// The first live enemy (level order) with any contact decides the tick
    #[default]
    FirstContact,
    /// Every live enemy is tested; any touch kills the character and then no
    /// enemy dies, otherwise every stomped enemy dies
    AllContacts,
}

/// Everything a world needs besides the level
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldConfig {
    pub tuning: PhysicsTuning,
    pub stats: CharacterStats,
    pub enemy_policy: EnemyContactPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::BASE_TUNING;
    use crate::game::characters::BASE_STATS;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.tuning, BASE_TUNING);
        assert_eq!(config.stats, BASE_STATS);
        assert_eq!(config.enemy_policy, EnemyContactPolicy::FirstContact);
    }
}
