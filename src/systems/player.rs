//! Player event resolution.
//!
//! [`resolve_player_events`] drains every player message the host wrote this
//! frame and applies it to [`ProgressionState`] in a fixed order:
//!
//! 1. coin contacts
//! 2. enemy stomps
//! 3. side hits from enemies that were not stomped this frame
//! 4. falls
//! 5. victory claims
//!
//! Rewards are banked before damage. The first hit that lands opens the
//! invulnerability window, so further hits in the same frame are absorbed.
//! Duplicate contacts with the same coin or enemy count once.

use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::collision::{PlayerCoinContact, PlayerEnemyContact};
use crate::events::player::{PlayerFell, PlayerReaction, VictoryClaim};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::progression::ProgressionState;
use crate::resources::progressionconfig::ProgressionConfig;
use crate::resources::worldtime::WorldTime;

const STOMP_BOUNCE: f32 = 0.8;
const KNOCKBACK_JUMP: f32 = 0.5;
const KNOCKBACK_SPEED: f32 = 200.0;

#[allow(clippy::too_many_arguments)]
pub fn resolve_player_events(
    mut coin_contacts: MessageReader<PlayerCoinContact>,
    mut enemy_contacts: MessageReader<PlayerEnemyContact>,
    mut falls: MessageReader<PlayerFell>,
    mut claims: MessageReader<VictoryClaim>,
    mut reactions: MessageWriter<PlayerReaction>,
    coins: Query<&Coin>,
    enemies: Query<(), With<Enemy>>,
    mut player: Query<&mut MapPosition, With<Player>>,
    config: Res<ProgressionConfig>,
    world_time: Res<WorldTime>,
    mut progression: ResMut<ProgressionState>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let now = world_time.elapsed;

    let mut collected: FxHashSet<Entity> = FxHashSet::default();
    for contact in coin_contacts.read() {
        if !collected.insert(contact.coin) {
            continue;
        }
        let Ok(coin) = coins.get(contact.coin) else {
            debug!("Ignoring contact with missing coin {:?}", contact.coin);
            continue;
        };
        let score = progression.record_coin(coin.value);
        debug!("Coin worth {} collected, score {}", coin.value, score);
        commands.entity(contact.coin).try_despawn();
    }

    let contacts: SmallVec<[PlayerEnemyContact; 8]> = enemy_contacts.read().copied().collect();
    let tolerance = config.stomp_tolerance;

    let mut defeated: FxHashSet<Entity> = FxHashSet::default();
    for contact in contacts.iter().filter(|c| c.is_stomp(tolerance)) {
        if enemies.get(contact.enemy).is_err() || !defeated.insert(contact.enemy) {
            continue;
        }
        let score = progression.record_enemy_defeat(&config);
        debug!("Enemy {:?} stomped, score {}", contact.enemy, score);
        commands.entity(contact.enemy).try_despawn();
        reactions.write(PlayerReaction::Bounce {
            strength: config.jump_force * STOMP_BOUNCE,
        });
    }

    let mut game_over = progression.lives == 0;
    for contact in contacts.iter().filter(|c| !c.is_stomp(tolerance)) {
        if game_over {
            break;
        }
        if defeated.contains(&contact.enemy) || enemies.get(contact.enemy).is_err() {
            continue;
        }
        let outcome = progression.record_damage(&config, now);
        if !outcome.applied {
            continue;
        }
        game_over = outcome.game_over;
        if !game_over {
            let player_x = player.single().map(|p| p.x).unwrap_or(0.0);
            let direction = if player_x < config.world_width / 2.0 {
                1.0
            } else {
                -1.0
            };
            reactions.write(PlayerReaction::Knockback {
                direction,
                jump: config.jump_force * KNOCKBACK_JUMP,
                horizontal: KNOCKBACK_SPEED,
            });
        }
    }

    // Several fall reports in one frame are the same fall.
    let fell = falls.read().count() > 0;
    if fell && !game_over {
        let outcome = progression.record_damage(&config, now);
        game_over = outcome.game_over;
        if !game_over {
            let (x, y) = config.player_spawn();
            if let Ok(mut pos) = player.single_mut() {
                pos.x = x;
                pos.y = y;
            }
            reactions.write(PlayerReaction::Respawn { x, y });
        }
    }

    let claimed = claims.read().count() > 0;

    if game_over {
        info!("Game over with score {}", progression.score);
        next_state.set(GameStates::Lost);
    } else if claimed {
        if progression.check_win_condition(&config) {
            info!("Victory claimed with score {}", progression.score);
            next_state.set(GameStates::Won);
        } else {
            debug!(
                "Victory claim rejected: score {} level {}",
                progression.score, progression.level
            );
        }
    }
}
