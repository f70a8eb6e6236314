use bevy_ecs::prelude::Component;

/// Marker for the player-controlled entity. The host keeps its
/// [`MapPosition`](crate::components::mapposition::MapPosition) in sync with physics.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
