//! Busy period after a section scroll.
//!
//! Inserted by [`crate::systems::section::section_progress_system`] when a
//! section starts scrolling and removed by
//! [`crate::systems::section::section_cooldown_system`] once it runs out,
//! which also clears the transition flag on
//! [`ProgressionState`](crate::resources::progression::ProgressionState).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct SectionCooldown {
    /// Seconds until another section may start.
    pub remaining: f32,
}

impl SectionCooldown {
    pub fn new(seconds: f32) -> Self {
        SectionCooldown { remaining: seconds }
    }
}
