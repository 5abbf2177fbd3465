// Tick driver
//
// `World` owns the only mutable copy of the character, enemies and
// collectibles for one level attempt. Each `step` runs, in order: apply
// intent, integrate, resolve collisions, patrol enemies, report.

pub mod config;
pub mod events;
pub mod report;
pub mod resolver;

#[allow(unused_imports)]
pub use config::{EnemyContactPolicy, WorldConfig};
#[allow(unused_imports)]
pub use events::{DeathCause, GameEvent};
#[allow(unused_imports)]
pub use report::{CharacterSnapshot, TickReport, WorldSnapshot};
#[allow(unused_imports)]
pub use resolver::{CollisionResolver, Resolution, ResolveInput};

use std::rc::Rc;

use log::{debug, info, warn};

use crate::core::Aabb;
use crate::engine::input::ControlIntent;
use crate::engine::physics::integrate;
use crate::game::characters::Character;
use crate::game::entities::{Collectible, CollectibleKind, Enemy};
use crate::game::level::Level;

pub struct World {
    level: Rc<Level>,
    config: WorldConfig,
    resolver: CollisionResolver,
    character: Character,
    enemies: Vec<Enemy>,
    collectibles: Vec<Collectible>,
    tick: u64,
}

impl World {
    pub fn new(level: Rc<Level>, config: WorldConfig) -> Self {
        for band in config.tuning.skippable_bands() {
            warn!(
                "{} is below terminal velocity ({}); fast falls may skip it",
                band, config.tuning.terminal_velocity
            );
        }

        let mut world = Self {
            character: Character::new(level.spawn(), config.stats),
            resolver: CollisionResolver::new(config.tuning, config.enemy_policy),
            enemies: Vec::new(),
            collectibles: Vec::new(),
            tick: 0,
            level,
            config,
        };
        world.reset();
        world
    }

    /// Restore the level's initial state: spawn, live enemies, uncollected items
    pub fn reset(&mut self) {
        self.character.respawn(self.level.spawn());
        self.enemies = self.level.enemy_spawns().iter().map(Enemy::from_spawn).collect();
        self.collectibles = self
            .level
            .collectible_spawns()
            .iter()
            .map(Collectible::from_spawn)
            .collect();
        self.tick = 0;
        info!("Level '{}' started", self.level.name());
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self, intent: &ControlIntent) -> TickReport {
        self.tick += 1;
        let mut events = Vec::new();

        // A dead character stays put until the level is reset
        if self.character.is_alive() {
            if self.character.apply_intent(intent) {
                debug!(
                    "Jump {}/{} at tick {}",
                    self.character.jump_count(),
                    self.character.max_jumps(),
                    self.tick
                );
            }

            let stats = self.character.stats;
            let step = integrate(self.character.position, self.character.velocity, &self.config.tuning);
            let input = ResolveInput {
                body: Aabb::at(step.position, stats.width, stats.height),
                velocity: step.velocity,
                support: self.character.support(),
                platforms: self.level.platforms(),
                ground_level: self.level.ground_level(),
                void_threshold: self.level.void_threshold(),
                goal: self.level.goal(),
            };
            let resolution = self
                .resolver
                .resolve(&input, &mut self.enemies, &mut self.collectibles);

            self.character.position = resolution.position;
            self.character.velocity = resolution.velocity;
            if resolution.death.is_some() {
                self.character.die();
            } else if let Some(support) = resolution.support {
                self.character.land(support);
            } else {
                self.character.leave_ground();
            }

            for event in &resolution.events {
                debug!("Tick {}: {:?}", self.tick, event);
                if let GameEvent::CollectedItem {
                    kind: CollectibleKind::DoubleJump,
                    ..
                } = event
                {
                    self.character.enable_double_jump();
                }
            }

            let machine = self.character.state_machine();
            if machine.state_just_changed() && machine.previous_state() != machine.state() {
                debug!(
                    "Tick {}: character {} -> {}",
                    self.tick,
                    machine.previous_state().name(),
                    machine.state().name()
                );
            }

            events = resolution.events;
            self.character.tick();
        }

        for enemy in &mut self.enemies {
            enemy.patrol();
        }

        TickReport {
            tick: self.tick,
            position: self.character.position,
            velocity: self.character.velocity,
            state: self.character.state(),
            events,
        }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            character: CharacterSnapshot {
                position: self.character.position,
                velocity: self.character.velocity,
                state: self.character.state(),
                jump_count: self.character.jump_count(),
                max_jumps: self.character.max_jumps(),
                attached_platform: self.character.attached_platform(),
                facing_direction: self.character.facing_direction(),
            },
            enemies: self.enemies.clone(),
            collectibles: self.collectibles.clone(),
        }
    }

    pub fn level(&self) -> &Rc<Level> {
        &self.level
    }

}
