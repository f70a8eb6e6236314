//! World setup, scene entry and the per-frame schedule.
//!
//! A host embeds the progression core in three steps:
//!
//! 1. [`setup_world`] inserts resources, message queues, the game state
//!    observer and the registered `enter_play` hook
//! 2. [`start_new_game`] requests [`GameStates::Playing`], which runs
//!    [`enter_play`]
//! 3. Each frame: write contact messages, call
//!    [`update_world_time`](crate::systems::time::update_world_time), run the
//!    [`build_schedule`] schedule, then drain [`PlayerReaction`] messages
//!
//! [`PlayerReaction`]: crate::events::player::PlayerReaction

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::group::TrackedGroups;
use crate::resources::hud::Hud;
use crate::resources::progression::ProgressionState;
use crate::resources::progressionconfig::ProgressionConfig;
use crate::resources::sectioncooldown::SectionCooldown;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::section::floor_layout;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::group::update_group_counts_system;
use crate::systems::hud::update_hud_system;
use crate::systems::messages::{init_player_messages, update_player_messages};
use crate::systems::patrol::enemy_patrol_system;
use crate::systems::player::resolve_player_events;
use crate::systems::section::{
    ENEMY_GROUP, PLAYER_GROUP, section_cooldown_system, section_progress_system, spawn_layout,
};

/// Insert everything the progression systems need into `world`.
pub fn setup_world(world: &mut World, config: ProgressionConfig) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(ProgressionState::new(&config));
    world.insert_resource(config);
    world.insert_resource(TrackedGroups::default().with(ENEMY_GROUP));
    world.insert_resource(Hud::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    init_player_messages(world);

    // Registered systems are entities too; keep them alive across games.
    let mut systems_store = SystemsStore::new();
    let enter_play_system_id = world.register_system(enter_play);
    world
        .entity_mut(enter_play_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_play", enter_play_system_id);
    world.insert_resource(systems_store);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.flush();
}

/// Request a fresh game and apply the transition immediately.
pub fn start_new_game(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// Enter hook for [`GameStates::Playing`].
///
/// Clears the previous game, resets progression and lays out the player, the
/// floor and the opening section.
pub fn enter_play(
    mut commands: Commands,
    stale: Query<Entity, (With<Group>, Without<Persistent>)>,
    config: Res<ProgressionConfig>,
    mut progression: ResMut<ProgressionState>,
) {
    for entity in stale.iter() {
        commands.entity(entity).try_despawn();
    }
    commands.remove_resource::<SectionCooldown>();

    *progression = ProgressionState::new(&config);

    let (x, y) = config.player_spawn();
    commands.spawn((Group::new(PLAYER_GROUP), Player, MapPosition::new(x, y)));

    let floor = spawn_layout(&mut commands, &floor_layout(&config));
    let layout = progression.initial_section(&config);
    let content = spawn_layout(&mut commands, &layout.commands);
    info!(
        "New game: {} lives, {} floor segments, {} placements in the opening section",
        progression.lives, floor, content
    );
}

/// Build the per-frame schedule.
///
/// Gameplay systems run in a fixed chain and only while playing; HUD and
/// message upkeep run every frame.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        (
            enemy_patrol_system,
            resolve_player_events,
            update_group_counts_system,
            section_progress_system,
            section_cooldown_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(update_hud_system.after(section_cooldown_system));
    update.add_systems(update_player_messages.after(update_hud_system));
    update
}
