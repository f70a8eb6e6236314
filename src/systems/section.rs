//! Section progression systems.
//!
//! - [`section_progress_system`] – scrolls the world and generates the next
//!   section once the current one has no enemies left
//! - [`section_cooldown_system`] – ends the transition after the scroll
//!   cooldown elapses
//! - [`spawn_layout`] / [`spawn_placement`] – turn [`PlacementCommand`]s into
//!   entities
//!
//! # Transition Flow
//!
//! 1. `update_group_counts_system` publishes the live enemy count
//! 2. If no transition is running and the count is zero, the busy flag on
//!    [`ProgressionState`] is set
//! 3. Every [`Scrollable`] entity moves down by `scroll_step`; anything pushed
//!    past the bottom of the world is despawned
//! 4. [`ProgressionState::advance_section`] produces the next layout, which is
//!    spawned
//! 5. A [`SectionCooldown`] is armed; when it runs out the busy flag clears

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::scrollable::Scrollable;
use crate::resources::gamestate::NextGameState;
use crate::resources::group::TrackedGroups;
use crate::resources::progression::ProgressionState;
use crate::resources::progressionconfig::ProgressionConfig;
use crate::resources::sectioncooldown::SectionCooldown;
use crate::resources::worldtime::WorldTime;
use crate::section::{PLATFORM_HEIGHT, PlacementCommand, PlacementError};

pub const ENEMY_GROUP: &str = "enemy";
pub const COIN_GROUP: &str = "coin";
pub const PLATFORM_GROUP: &str = "platform";
pub const FLOOR_GROUP: &str = "floor";
pub const PLAYER_GROUP: &str = "player";

/// Instantiate one placement.
///
/// Invalid commands are rejected before anything is spawned.
pub fn spawn_placement(
    commands: &mut Commands,
    placement: &PlacementCommand,
) -> Result<Entity, PlacementError> {
    placement.validate()?;
    let entity = match *placement {
        PlacementCommand::Platform {
            x,
            y,
            width,
            is_special,
        } => commands
            .spawn((
                Group::new(PLATFORM_GROUP),
                MapPosition::new(x, y),
                Platform {
                    width,
                    height: PLATFORM_HEIGHT,
                    is_special,
                },
                Scrollable,
            ))
            .id(),
        PlacementCommand::Enemy {
            x,
            y,
            move_speed,
            patrol_start,
            patrol_end,
        } => commands
            .spawn((
                Group::new(ENEMY_GROUP),
                MapPosition::new(x, y),
                Enemy::new(move_speed, patrol_start, patrol_end),
                Scrollable,
            ))
            .id(),
        PlacementCommand::Coin { x, y, value } => commands
            .spawn((
                Group::new(COIN_GROUP),
                MapPosition::new(x, y),
                Coin { value },
                Scrollable,
            ))
            .id(),
        PlacementCommand::Floor {
            x,
            y,
            width,
            height,
        } => commands
            .spawn((
                Group::new(FLOOR_GROUP),
                MapPosition::new(x, y),
                Platform {
                    width,
                    height,
                    is_special: false,
                },
            ))
            .id(),
    };
    Ok(entity)
}

/// Spawn every placement in order, skipping the ones that fail.
///
/// Returns how many entities were created. A failed placement only leaves the
/// section less populated.
pub fn spawn_layout(commands: &mut Commands, placements: &[PlacementCommand]) -> usize {
    let mut spawned = 0;
    for placement in placements {
        match spawn_placement(commands, placement) {
            Ok(_) => spawned += 1,
            Err(e) => warn!("Skipping placement {:?}: {}", placement, e),
        }
    }
    spawned
}

/// Advance to the next section when the current one is cleared.
pub fn section_progress_system(
    tracked_groups: Res<TrackedGroups>,
    config: Res<ProgressionConfig>,
    next_state: Res<NextGameState>,
    mut progression: ResMut<ProgressionState>,
    mut scrollables: Query<(Entity, &mut MapPosition), With<Scrollable>>,
    mut commands: Commands,
) {
    if progression.section_in_progress {
        return;
    }
    // The game ended this frame; nothing scores after that.
    if progression.lives == 0 || next_state.is_pending() {
        return;
    }
    if !ProgressionState::is_section_cleared(tracked_groups.count(ENEMY_GROUP)) {
        return;
    }
    if !progression.begin_transition() {
        return;
    }

    let mut culled = 0;
    for (entity, mut pos) in scrollables.iter_mut() {
        pos.y += config.scroll_step;
        if pos.y >= config.world_height {
            commands.entity(entity).try_despawn();
            culled += 1;
        }
    }
    debug!("Scrolled section, {} entities left the world", culled);

    let layout = progression.advance_section(&config);
    let spawned = spawn_layout(&mut commands, &layout.commands);
    debug!(
        "Spawned {}/{} placements for level {}",
        spawned,
        layout.commands.len(),
        layout.level
    );

    commands.insert_resource(SectionCooldown::new(config.scroll_cooldown_seconds));
}

/// Count down the scroll cooldown and release the transition flag.
pub fn section_cooldown_system(
    cooldown: Option<ResMut<SectionCooldown>>,
    world_time: Res<WorldTime>,
    mut progression: ResMut<ProgressionState>,
    mut commands: Commands,
) {
    let Some(mut cooldown) = cooldown else {
        return;
    };
    // Armed this frame; the frame that scrolled does not count.
    if cooldown.is_added() {
        return;
    }
    cooldown.remaining -= world_time.delta;
    if cooldown.remaining <= 0.0 {
        progression.finish_transition();
        commands.remove_resource::<SectionCooldown>();
    }
}
