use bevy_ecs::prelude::Component;

/// Collectible worth `value` points.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coin {
    pub value: u32,
}
