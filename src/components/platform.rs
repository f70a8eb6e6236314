use bevy_ecs::prelude::Component;

/// Static rectangle the player can stand on. Floor segments use it too.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub width: f32,
    pub height: f32,
    /// Drawn in the alternate platform colour.
    pub is_special: bool,
}
