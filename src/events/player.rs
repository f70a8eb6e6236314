//! Player messages exchanged with the host.
//!
//! Inbound: [`PlayerFell`] and [`VictoryClaim`].
//! Outbound: [`PlayerReaction`], impulses the host's physics should apply.
use bevy_ecs::message::Message;

/// The player dropped below the bottom of the world.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct PlayerFell;

/// The player asked to finish the game. Honoured only if the win condition holds.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct VictoryClaim;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PlayerReaction {
    /// Jump off a stomped enemy.
    Bounce { strength: f32 },
    /// Thrown away from a side hit. `direction` is `1.0` (right) or `-1.0` (left);
    /// `jump` is the upward impulse and `horizontal` the sideways speed.
    Knockback {
        direction: f32,
        jump: f32,
        horizontal: f32,
    },
    /// Put back at the spawn point with zero velocity.
    Respawn { x: f32, y: f32 },
}
