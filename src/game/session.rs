// Score, lives and campaign progression on top of the tick driver

use std::rc::Rc;

use log::info;

use crate::engine::input::ControlIntent;
use crate::game::entities::CollectibleKind;
use crate::game::level::{builtin, Level, LevelError};
use crate::game::world::{GameEvent, TickReport, World, WorldConfig};

/// Scoring and lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRules {
    pub starting_lives: u32,
    pub score_per_coin: u32,
    pub score_per_stomp: u32,
}

pub const BASE_RULES: SessionRules = SessionRules {
    starting_lives: 2,
    score_per_coin: 5,
    score_per_stomp: 10,
};

impl Default for SessionRules {
    fn default() -> Self {
        BASE_RULES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Playing,
    GameOver,
    Victory,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Campaign has no levels")]
    EmptyCampaign,

    #[error("Unknown level {index} (campaign has {count})")]
    UnknownLevel { index: usize, count: usize },

    #[error("Invalid level: {0}")]
    Level(#[from] LevelError),
}

/// One playthrough of a campaign
pub struct Session {
    levels: Vec<Rc<Level>>,
    config: WorldConfig,
    rules: SessionRules,
    world: World,
    level_index: usize,
    score: u32,
    lives: u32,
    status: SessionStatus,
}

impl Session {
    pub fn new(
        levels: Vec<Level>,
        config: WorldConfig,
        rules: SessionRules,
    ) -> Result<Self, SessionError> {
        let levels: Vec<Rc<Level>> = levels.into_iter().map(Rc::new).collect();
        let first = levels.first().cloned().ok_or(SessionError::EmptyCampaign)?;

        Ok(Self {
            world: World::new(first, config),
            levels,
            config,
            rules,
            level_index: 0,
            score: 0,
            lives: rules.starting_lives,
            status: SessionStatus::Playing,
        })
    }

    /// Session over the built-in levels
    pub fn from_campaign(config: WorldConfig, rules: SessionRules) -> Result<Self, SessionError> {
        Self::new(builtin::campaign()?, config, rules)
    }

    /// Jump to a level, keeping score and lives
    pub fn load_level(&mut self, index: usize) -> Result<(), SessionError> {
        let level = self
            .levels
            .get(index)
            .cloned()
            .ok_or(SessionError::UnknownLevel {
                index,
                count: self.levels.len(),
            })?;

        info!("Loading level {} '{}'", index + 1, level.name());
        self.world = World::new(level, self.config);
        self.level_index = index;
        self.status = SessionStatus::Playing;
        Ok(())
    }

    /// Run one tick and apply its events to score, lives and progression.
    /// Returns `None` once the session has ended.
    pub fn tick(&mut self, intent: &ControlIntent) -> Option<TickReport> {
        if self.status != SessionStatus::Playing {
            return None;
        }

        let report = self.world.step(intent);
        for event in &report.events {
            match event {
                GameEvent::CollectedItem {
                    kind: CollectibleKind::Score,
                    ..
                } => self.score += self.rules.score_per_coin,
                GameEvent::KilledEnemy(_) => self.score += self.rules.score_per_stomp,
                _ => {}
            }
        }

        if report.died() {
            self.lose_life();
        } else if report.reached_goal() {
            self.advance();
        }
        Some(report)
    }

    /// Retry the current level; score and lives are kept
    pub fn restart_level(&mut self) {
        self.world.reset();
        self.status = SessionStatus::Playing;
    }

    /// Back to the first level with fresh score and lives
    pub fn restart_game(&mut self) {
        info!("Restarting game");
        self.score = 0;
        self.lives = self.rules.starting_lives;
        self.level_index = 0;
        self.world = World::new(Rc::clone(&self.levels[0]), self.config);
        self.status = SessionStatus::Playing;
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            info!("Life lost, {} left", self.lives);
            self.world.reset();
        } else {
            info!("Game over with score {}", self.score);
            self.status = SessionStatus::GameOver;
        }
    }

    fn advance(&mut self) {
        let next = self.level_index + 1;
        if next < self.levels.len() {
            self.world = World::new(Rc::clone(&self.levels[next]), self.config);
            self.level_index = next;
            info!("Level {} '{}'", next + 1, self.world.level().name());
        } else {
            info!("Victory with score {}", self.score);
            self.status = SessionStatus::Victory;
        }
    }

    /// One-line status for the window title
    pub fn hud_line(&self) -> String {
        let mut line = format!(
            "{} ({}/{}) | Score: {} | Lives: {}",
            self.world.level().name(),
            self.level_index + 1,
            self.levels.len(),
            self.score,
            self.lives
        );
        match self.status {
            SessionStatus::Playing => {}
            SessionStatus::GameOver => line.push_str(" | GAME OVER - press R"),
            SessionStatus::Victory => line.push_str(" | VICTORY - press R"),
        }
        line
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::EnemySpawn;

    /// Character falls past the void on tick 3
    fn pit(name: &str) -> Level {
        Level::builder(name)
            .spawn(50.0, 395.0)
            .goal(2000.0, 300.0, 50.0, 80.0)
            .build()
            .unwrap()
    }

    /// Character overlaps the goal on tick 1
    fn finish(name: &str) -> Level {
        Level::builder(name)
            .platform(1, 0.0, 380.0, 800.0, 20.0)
            .goal(40.0, 290.0, 50.0, 80.0)
            .build()
            .unwrap()
    }

    fn session(levels: Vec<Level>) -> Session {
        Session::new(levels, WorldConfig::default(), SessionRules::default()).unwrap()
    }

    fn run(session: &mut Session, ticks: usize) {
        for _ in 0..ticks {
            session.tick(&ControlIntent::IDLE);
        }
    }

    #[test]
    fn test_empty_campaign() {
        let result = Session::new(Vec::new(), WorldConfig::default(), SessionRules::default());
        assert!(matches!(result, Err(SessionError::EmptyCampaign)));
    }

    #[test]
    fn test_builtin_campaign() {
        let session = Session::from_campaign(WorldConfig::default(), BASE_RULES).unwrap();
        assert_eq!(session.level_count(), 2);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_unknown_level() {
        let mut session = session(vec![pit("a")]);
        let err = session.load_level(3).unwrap_err();
        assert_eq!(err, SessionError::UnknownLevel { index: 3, count: 1 });
        assert_eq!(err.to_string(), "Unknown level 3 (campaign has 1)");
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_load_level() {
        let mut session = session(vec![pit("a"), finish("b")]);
        session.load_level(1).unwrap();
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.world().level().name(), "b");
    }

    #[test]
    fn test_level_error_converts() {
        let err: SessionError = LevelError::MissingGoal("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid level: Level 'x' has no goal");
    }

    #[test]
    fn test_coin_and_stomp_scores() {
        let level = Level::builder("scoring")
            .spawn(405.0, 290.0)
            .platform(1, 0.0, 380.0, 800.0, 20.0)
            .collectible(1, 405.0, 300.0, CollectibleKind::Score)
            .collectible(2, 405.0, 310.0, CollectibleKind::DoubleJump)
            .enemy(EnemySpawn::new(1, 400.0, 350.0).patrol(0.0, 0.0, Default::default()))
            .goal(2000.0, 300.0, 50.0, 80.0)
            .build()
            .unwrap();
        let mut session = session(vec![level]);

        run(&mut session, 1);
        // Double jump pickups are not worth points
        assert_eq!(session.score(), 5);

        run(&mut session, 5);
        assert_eq!(session.score(), 15);
        assert_eq!(session.lives(), 2);
    }

    #[test]
    fn test_death_restarts_level() {
        let mut session = session(vec![pit("a")]);
        run(&mut session, 3);

        assert_eq!(session.lives(), 1);
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.world().snapshot().tick, 0);
        assert!(session.world().snapshot().character.state.is_alive());
    }

    #[test]
    fn test_game_over_after_last_life() {
        let mut session = session(vec![pit("a")]);
        run(&mut session, 6);

        assert_eq!(session.lives(), 0);
        assert_eq!(session.status(), SessionStatus::GameOver);
        assert!(session.tick(&ControlIntent::IDLE).is_none());
        assert!(session.hud_line().ends_with("GAME OVER - press R"));
    }

    #[test]
    fn test_score_survives_level_restart() {
        let level = Level::builder("coins")
            .spawn(50.0, 395.0)
            .collectible(1, 50.0, 400.0, CollectibleKind::Score)
            .goal(2000.0, 300.0, 50.0, 80.0)
            .build()
            .unwrap();
        let mut session = session(vec![level]);

        run(&mut session, 3);
        assert_eq!(session.lives(), 1);
        assert_eq!(session.score(), 5);

        // The coin is back after the restart
        run(&mut session, 1);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_goal_advances_campaign() {
        let mut session = session(vec![finish("a"), finish("b")]);
        session.tick(&ControlIntent::IDLE);

        assert_eq!(session.level_index(), 1);
        assert_eq!(session.world().level().name(), "b");
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.lives(), 2);

        session.tick(&ControlIntent::IDLE);
        assert_eq!(session.status(), SessionStatus::Victory);
        assert!(session.tick(&ControlIntent::IDLE).is_none());
    }

    #[test]
    fn test_restart_game() {
        let mut session = session(vec![finish("a"), pit("b")]);
        run(&mut session, 7);
        assert_eq!(session.status(), SessionStatus::GameOver);

        session.restart_game();
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_restart_level_keeps_progress() {
        let mut session = session(vec![finish("a"), pit("b")]);
        run(&mut session, 2);
        session.restart_level();

        assert_eq!(session.level_index(), 1);
        assert_eq!(session.world().snapshot().tick, 0);
    }

    #[test]
    fn test_hud_line() {
        let session = session(vec![pit("Meadow"), pit("Quarry")]);
        assert_eq!(session.hud_line(), "Meadow (1/2) | Score: 0 | Lives: 2");
    }
}
