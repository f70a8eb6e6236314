//! Contact messages written by the host's collision detection.
//!
//! The progression core never tests shapes itself. The host reports each
//! player contact it detects during a frame, and
//! [`crate::systems::player::resolve_player_events`] settles them in a fixed
//! order.
use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// The player touched an enemy.
///
/// `player_bottom` and `enemy_top` are world y coordinates (y grows down) at
/// the moment of contact. They decide between a stomp and a side hit.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerEnemyContact {
    pub enemy: Entity,
    pub player_bottom: f32,
    pub enemy_top: f32,
}

impl PlayerEnemyContact {
    /// A stomp lands when the player's feet are at most `tolerance` pixels
    /// below the enemy's top.
    pub fn is_stomp(&self, tolerance: f32) -> bool {
        self.player_bottom - self.enemy_top <= tolerance
    }
}

/// The player touched a coin.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerCoinContact {
    pub coin: Entity,
}
