use bevy_ecs::prelude::Component;

/// Marker for section content that moves down when a section is cleared.
/// Floor segments and the player do not carry it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Scrollable;
