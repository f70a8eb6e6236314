//! Simulation clock.
//!
//! The host advances [`WorldTime`] once per frame through
//! [`crate::systems::time::update_world_time`]. Progression rules that depend
//! on time (invulnerability, scroll cooldown) read `elapsed` and `delta` from
//! here.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since the world was created.
    pub elapsed: f32,
    /// Scaled seconds covered by the current frame.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
