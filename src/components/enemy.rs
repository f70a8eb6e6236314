//! Patrolling enemy component.
//!
//! Enemies walk back and forth between `patrol_start` and `patrol_end` on the
//! x axis. See [`crate::systems::patrol::enemy_patrol_system`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    /// Horizontal speed in pixels per second.
    pub move_speed: f32,
    pub patrol_start: f32,
    pub patrol_end: f32,
    /// `1.0` walking right, `-1.0` walking left.
    pub direction: f32,
}

impl Enemy {
    pub fn new(move_speed: f32, patrol_start: f32, patrol_end: f32) -> Self {
        Enemy {
            move_speed,
            patrol_start,
            patrol_end,
            direction: 1.0,
        }
    }
}
