//! Tracked groups resource for entity counting.
//!
//! The [`TrackedGroups`] resource defines which group names should be
//! monitored by [`update_group_counts_system`](crate::systems::group::update_group_counts_system)
//! and holds the latest live count of each. The section system reads the
//! `"enemy"` count to decide when a section is cleared, which keeps the
//! progression rules independent of how entities are stored.
//!
//! # Usage
//!
//! ```ignore
//! tracked_groups.add_group("enemy");
//! // after update_group_counts_system has run:
//! let enemies = tracked_groups.count("enemy");
//! ```

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

/// Group names being counted and their live entity counts.
#[derive(Debug, Clone, Resource, Default)]
pub struct TrackedGroups {
    counts: FxHashMap<String, usize>,
}

impl TrackedGroups {
    /// Start tracking `group_name`; its count starts at zero.
    pub fn add_group(&mut self, group_name: impl Into<String>) {
        self.counts.entry(group_name.into()).or_insert(0);
    }

    /// Builder form of [`TrackedGroups::add_group`].
    pub fn with(mut self, group_name: impl Into<String>) -> Self {
        self.add_group(group_name);
        self
    }

    /// Returns `true` if the given group name is being tracked.
    pub fn has_group(&self, group_name: impl AsRef<str>) -> bool {
        self.counts.contains_key(group_name.as_ref())
    }

    /// Last published count; `0` for untracked groups.
    pub fn count(&self, group_name: impl AsRef<str>) -> usize {
        self.counts.get(group_name.as_ref()).copied().unwrap_or(0)
    }

    /// Publish fresh counts. Tracked groups absent from `counts` drop to zero.
    pub fn refresh(&mut self, counts: &FxHashMap<&str, usize>) {
        for (name, slot) in self.counts.iter_mut() {
            *slot = counts.get(name.as_str()).copied().unwrap_or(0);
        }
    }
}
