//! Message queue maintenance.
//!
//! Bevy ECS' [`Messages`] API requires calling `update()` once per frame so
//! that messages age out after every reader has had a chance to see them.
//! Run [`update_player_messages`] last in the frame.

use bevy_ecs::prelude::*;

use crate::events::collision::{PlayerCoinContact, PlayerEnemyContact};
use crate::events::player::{PlayerFell, PlayerReaction, VictoryClaim};

/// Insert the message queues the progression systems read and write.
pub fn init_player_messages(world: &mut World) {
    world.init_resource::<Messages<PlayerCoinContact>>();
    world.init_resource::<Messages<PlayerEnemyContact>>();
    world.init_resource::<Messages<PlayerFell>>();
    world.init_resource::<Messages<VictoryClaim>>();
    world.init_resource::<Messages<PlayerReaction>>();
}

pub fn update_player_messages(
    mut coin_contacts: ResMut<Messages<PlayerCoinContact>>,
    mut enemy_contacts: ResMut<Messages<PlayerEnemyContact>>,
    mut falls: ResMut<Messages<PlayerFell>>,
    mut claims: ResMut<Messages<VictoryClaim>>,
    mut reactions: ResMut<Messages<PlayerReaction>>,
) {
    coin_contacts.update();
    enemy_contacts.update();
    falls.update();
    claims.update();
    reactions.update();
}
