// Collision resolution for one tick
//
// Works on the tentative (integrated) character box and decides, in fixed
// precedence, what the tick means: void death, enemy contact, landing,
// pickups, goal.

use glam::Vec2;

use crate::core::Aabb;
use crate::engine::physics::{classify_enemy_contact, lands_on, EnemyContact, PhysicsTuning};
use crate::game::characters::Support;
use crate::game::entities::{Collectible, Enemy, EnemyId, Platform};

use super::config::EnemyContactPolicy;
use super::events::{DeathCause, GameEvent};

/// Static inputs for one resolution pass
#[derive(Debug, Clone, Copy)]
pub struct ResolveInput<'a> {
    /// Character box after integration
    pub body: Aabb,
    /// Velocity after gravity; y decides landings and stomps
    pub velocity: Vec2,
    /// Support at the end of the previous tick
    pub support: Option<Support>,
    pub platforms: &'a [Platform],
    pub ground_level: Option<f32>,
    pub void_threshold: f32,
    pub goal: &'a Aabb,
}

/// What the tick resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    /// `None` when airborne or dead
    pub support: Option<Support>,
    pub death: Option<DeathCause>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Default)]
struct EnemyOutcome {
    killer: Option<EnemyId>,
    stomped: Vec<EnemyId>,
}

/// Resolves the tentative character box against the level
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver {
    tuning: PhysicsTuning,
    policy: EnemyContactPolicy,
}

impl CollisionResolver {
    pub fn new(tuning: PhysicsTuning, policy: EnemyContactPolicy) -> Self {
        Self { tuning, policy }
    }

    /// Resolve one tick. Enemies and collectibles are mutated in place: stomped
    /// enemies die and touched collectibles are marked collected.
    pub fn resolve(
        &self,
        input: &ResolveInput,
        enemies: &mut [Enemy],
        collectibles: &mut [Collectible],
    ) -> Resolution {
        let mut body = input.body;
        let mut velocity = input.velocity;

        let support = self.find_support(&body, velocity.y, input.platforms, input.ground_level);
        if let Some((_, surface)) = support {
            body.y = surface - body.height;
            velocity.y = 0.0;
        }

        // Nothing else counts once the character has left the level
        if body.y > input.void_threshold {
            return Resolution {
                position: body.position(),
                velocity,
                support: None,
                death: Some(DeathCause::Void),
                events: vec![GameEvent::CharacterDied(DeathCause::Void)],
            };
        }

        let mut events = Vec::new();
        let outcome = self.resolve_enemies(&body, input.velocity.y, enemies);

        let death = outcome.killer.map(DeathCause::Enemy);
        if let Some(cause) = death {
            events.push(GameEvent::CharacterDied(cause));
        }

        for id in outcome.stomped {
            if let Some(enemy) = enemies.iter_mut().find(|e| e.id == id) {
                if enemy.kill() {
                    events.push(GameEvent::KilledEnemy(id));
                }
            }
        }

        let support = match (death, support) {
            (None, Some((support, _))) => Some(support),
            _ => None,
        };
        if let Some(support) = support {
            if input.support != Some(support) {
                events.push(match support {
                    Support::Platform(id) => GameEvent::LandedOnPlatform(id),
                    Support::Ground => GameEvent::HitGround,
                });
            }
        }

        for item in collectibles.iter_mut() {
            if !item.is_collected() && body.overlaps(&item.bounds) && item.collect() {
                events.push(GameEvent::CollectedItem {
                    id: item.id,
                    kind: item.kind,
                });
            }
        }

        if death.is_none() && body.overlaps(input.goal) {
            events.push(GameEvent::ReachedGoal);
        }

        Resolution {
            position: body.position(),
            velocity,
            support,
            death,
            events,
        }
    }

    /// First platform in level order that catches the body, then the ground.
    /// Returns the support and the y of its top surface.
    fn find_support(
        &self,
        body: &Aabb,
        velocity_y: f32,
        platforms: &[Platform],
        ground_level: Option<f32>,
    ) -> Option<(Support, f32)> {
        let tolerance = self.tuning.landing_tolerance;
        if let Some(platform) = platforms
            .iter()
            .find(|p| lands_on(body, velocity_y, &p.bounds, tolerance))
        {
            return Some((Support::Platform(platform.id), platform.surface()));
        }

        ground_level
            .filter(|&ground| body.bottom() >= ground)
            .map(|ground| (Support::Ground, ground))
    }

    fn resolve_enemies(&self, body: &Aabb, velocity_y: f32, enemies: &[Enemy]) -> EnemyOutcome {
        let tolerance = self.tuning.stomp_tolerance;
        let mut contacts = enemies.iter().filter(|e| e.is_alive()).filter_map(|e| {
            classify_enemy_contact(body, velocity_y, e.bounds(), tolerance).map(|c| (e.id, c))
        });

        let mut outcome = EnemyOutcome::default();
        match self.policy {
            EnemyContactPolicy::FirstContact => match contacts.next() {
                Some((id, EnemyContact::Stomp)) => outcome.stomped.push(id),
                Some((id, EnemyContact::Touch)) => outcome.killer = Some(id),
                None => {}
            },
            EnemyContactPolicy::AllContacts => {
                for (id, contact) in contacts {
                    match contact {
                        EnemyContact::Stomp => outcome.stomped.push(id),
                        EnemyContact::Touch if outcome.killer.is_none() => {
                            outcome.killer = Some(id)
                        }
                        EnemyContact::Touch => {}
                    }
                }
                if outcome.killer.is_some() {
                    outcome.stomped.clear();
                }
            }
        }
        outcome
    }
}
