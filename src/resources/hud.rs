//! Text the host displays over the game.
//!
//! Updated by [`crate::systems::hud::update_hud_system`] whenever progression
//! changes. The host only copies these strings into its text renderer.

use bevy_ecs::prelude::Resource;

pub const HEART: char = '♥';

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub score_text: String,
    pub lives_text: String,
    /// Alternates while the player is invulnerable; the host tints the player with it.
    pub player_flashing: bool,
}

impl Hud {
    pub fn lives_text(lives: u32) -> String {
        std::iter::repeat_n(HEART, lives as usize).collect()
    }
}
