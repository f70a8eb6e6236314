//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate enter hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::progression::ProgressionState;
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets
///   [`NextGameState`] to [`Unchanged`] and runs the enter hook of the new
///   state.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    progression: Option<Res<ProgressionState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if next_game_state.is_none() || game_state.is_none() {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    }
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            info!(
                "Transitioning from {:?} to {:?}",
                game_state.get(),
                new_state
            );
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_enter(
                &new_state,
                &mut commands,
                &systems_store,
                progression.as_deref(),
            );
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(
    state: &GameStates,
    commands: &mut Commands,
    systems_store: &SystemsStore,
    progression: Option<&ProgressionState>,
) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Playing => match systems_store.get("enter_play") {
            Some(id) => {
                commands.run_system(*id);
            }
            None => warn!("enter_play system not found in SystemsStore"),
        },
        GameStates::Won | GameStates::Lost => {
            if let Some(p) = progression {
                info!(
                    "Game finished ({:?}): level {}, score {}, lives {}",
                    state, p.level, p.score, p.lives
                );
            }
        }
    }
}
