//! Integration tests for the scripted autopilot host.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test autopilot_integration
//! ```

use bevy_ecs::prelude::*;

use skyclimb::autopilot::Autopilot;
use skyclimb::events::player::PlayerReaction;
use skyclimb::game::{build_schedule, setup_world, start_new_game};
use skyclimb::resources::gamestate::{GameState, GameStates};
use skyclimb::resources::progression::ProgressionState;
use skyclimb::resources::progressionconfig::ProgressionConfig;
use skyclimb::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;

/// (level, score, lives) after every frame, plus the final state.
type Trace = (Vec<(u32, u32, u32)>, GameStates);

fn play(seed: u64, frames: usize) -> Trace {
    let mut world = World::new();
    setup_world(&mut world, ProgressionConfig::new());
    start_new_game(&mut world);
    let mut schedule = build_schedule();
    let mut autopilot = Autopilot::new(seed);

    let mut trace = Vec::with_capacity(frames);
    for _ in 0..frames {
        autopilot.act(&mut world);
        update_world_time(&mut world, DT);
        schedule.run(&mut world);
        world.clear_trackers();
        autopilot.react(&mut world);

        let p = world.resource::<ProgressionState>();
        trace.push((p.level, p.score, p.lives));
        if matches!(
            world.resource::<GameState>().get(),
            GameStates::Won | GameStates::Lost
        ) {
            break;
        }
    }
    let outcome = world.resource::<GameState>().get().clone();
    (trace, outcome)
}

#[test]
fn same_seed_replays_the_same_game() {
    let first = play(7, 5_000);
    let second = play(7, 5_000);

    assert!(!first.0.is_empty());
    assert_eq!(first, second);
}

#[test]
fn react_drains_every_reaction() {
    let mut world = World::new();
    setup_world(&mut world, ProgressionConfig::new());
    {
        let mut reactions = world.resource_mut::<Messages<PlayerReaction>>();
        reactions.write(PlayerReaction::Bounce { strength: 480.0 });
        reactions.write(PlayerReaction::Knockback {
            direction: -1.0,
            jump: 300.0,
            horizontal: 200.0,
        });
        reactions.write(PlayerReaction::Respawn { x: 40.0, y: 280.0 });
    }

    let mut autopilot = Autopilot::new(1);
    assert_eq!(autopilot.react(&mut world), 3);
    assert_eq!(
        world
            .resource_mut::<Messages<PlayerReaction>>()
            .drain()
            .count(),
        0
    );
    assert_eq!(autopilot.react(&mut world), 0);
}
