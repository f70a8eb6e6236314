//! Scripted stand-in for a host engine.
//!
//! [`Autopilot`] plays the game without physics or input: every frame it rolls
//! a seeded [`fastrand::Rng`] to decide whether the player grabs a coin,
//! lands on or bumps into an enemy, falls, or claims victory, and writes the
//! matching messages into the world. The same seed always replays the same
//! game.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::collision::{PlayerCoinContact, PlayerEnemyContact};
use crate::events::player::{PlayerFell, PlayerReaction, VictoryClaim};
use crate::resources::progressionconfig::ProgressionConfig;

/// Per-frame odds of each scripted action.
#[derive(Debug, Clone, Copy)]
pub struct AutopilotOdds {
    pub coin: f32,
    pub enemy: f32,
    /// Share of enemy contacts that land on top.
    pub stomp: f32,
    pub fall: f32,
    pub claim: f32,
}

impl Default for AutopilotOdds {
    fn default() -> Self {
        AutopilotOdds {
            coin: 0.02,
            enemy: 0.03,
            stomp: 0.75,
            fall: 0.002,
            claim: 0.01,
        }
    }
}

pub struct Autopilot {
    rng: fastrand::Rng,
    odds: AutopilotOdds,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Autopilot {
            rng: fastrand::Rng::with_seed(seed),
            odds: AutopilotOdds::default(),
        }
    }

    /// Roll this frame's actions and write them as messages.
    pub fn act(&mut self, world: &mut World) {
        let (width, tolerance) = {
            let config = world.resource::<ProgressionConfig>();
            (config.world_width, config.stomp_tolerance)
        };

        // Wander so knockbacks point both ways.
        let mut players = world.query_filtered::<&mut MapPosition, With<Player>>();
        if let Ok(mut pos) = players.single_mut(world) {
            pos.x = self.rng.f32() * width;
        }

        if self.rng.f32() < self.odds.coin {
            let mut coins = world.query_filtered::<Entity, With<Coin>>();
            let candidates: Vec<Entity> = coins.iter(world).collect();
            if let Some(coin) = self.pick(&candidates) {
                world
                    .resource_mut::<Messages<PlayerCoinContact>>()
                    .write(PlayerCoinContact { coin });
            }
        }

        if self.rng.f32() < self.odds.enemy {
            let mut enemies = world.query_filtered::<(Entity, &MapPosition), With<Enemy>>();
            let candidates: Vec<(Entity, f32)> =
                enemies.iter(world).map(|(e, pos)| (e, pos.y)).collect();
            if let Some((enemy, enemy_top)) = self.pick(&candidates) {
                let player_bottom = if self.rng.f32() < self.odds.stomp {
                    enemy_top + self.rng.f32() * tolerance
                } else {
                    enemy_top + tolerance + 1.0 + self.rng.f32() * 10.0
                };
                world
                    .resource_mut::<Messages<PlayerEnemyContact>>()
                    .write(PlayerEnemyContact {
                        enemy,
                        player_bottom,
                        enemy_top,
                    });
            }
        }

        if self.rng.f32() < self.odds.fall {
            world.resource_mut::<Messages<PlayerFell>>().write(PlayerFell);
        }

        if self.rng.f32() < self.odds.claim {
            world
                .resource_mut::<Messages<VictoryClaim>>()
                .write(VictoryClaim);
        }
    }

    /// Apply the reactions the core asked for. Physics is not simulated, so
    /// they are only logged.
    pub fn react(&mut self, world: &mut World) -> usize {
        let mut count = 0;
        for reaction in world.resource_mut::<Messages<PlayerReaction>>().drain() {
            debug!("Player reaction: {:?}", reaction);
            count += 1;
        }
        count
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.rng.usize(..items.len())])
        }
    }
}
