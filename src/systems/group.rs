//! Group entity counting system.
//!
//! Counts entities belonging to tracked groups and publishes the counts in
//! [`TrackedGroups`]. This is the "live enemies in the active section" query
//! the progression rules consume.
//!
//! Groups with zero entities are reported as `0`, which is what lets a
//! section be detected as cleared once its last enemy is despawned.

use crate::components::group::Group;
use crate::resources::group::TrackedGroups;
use bevy_ecs::prelude::*;

use rustc_hash::FxHashMap;

/// Counts entities for each tracked group and updates [`TrackedGroups`].
pub fn update_group_counts_system(
    query_group: Query<&Group>,
    mut tracked_groups: ResMut<TrackedGroups>,
) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for group in query_group.iter() {
        if tracked_groups.has_group(group.name()) {
            *counts.entry(group.name()).or_insert(0) += 1;
        }
    }
    tracked_groups.refresh(&counts);
}
