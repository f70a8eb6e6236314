//! Skyclimb headless runner.
//!
//! Drives the progression core with the scripted [`Autopilot`] host instead
//! of a real engine, which is handy for tuning `config.ini` and for watching
//! how a seed plays out.
//!
//! # Main Loop
//!
//! 1. Load configuration and build the ECS world
//! 2. Start a new game (player, floor, opening section)
//! 3. Each frame:
//!    - let the autopilot write contact messages
//!    - advance world time
//!    - run the progression schedule
//!    - drain player reactions
//! 4. Stop when the game is won or lost, or the frame budget runs out
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 7 --frames 20000
//! RUST_LOG=debug cargo run -- --dump-layout 3
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use skyclimb::autopilot::Autopilot;
use skyclimb::game::{build_schedule, setup_world, start_new_game};
use skyclimb::resources::gamestate::{GameState, GameStates};
use skyclimb::resources::hud::Hud;
use skyclimb::resources::progression::ProgressionState;
use skyclimb::resources::progressionconfig::ProgressionConfig;
use skyclimb::section::SectionLayout;
use skyclimb::systems::time::update_world_time;

/// Skyclimb progression core
#[derive(Parser)]
#[command(version, about = "Runs the skyclimb section generator and progression rules headless.")]
struct Cli {
    /// Configuration file (INI). Missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the autopilot player.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum number of frames to simulate.
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Print the section layout generated for LEVEL as JSON and exit.
    #[arg(long, value_name = "LEVEL")]
    dump_layout: Option<u32>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ProgressionConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: write configuration and quit
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // Early-exit: dump one layout and quit
    if let Some(level) = cli.dump_layout {
        let layout = SectionLayout::generate(level, &config);
        match serde_json::to_string_pretty(&layout) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing layout: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.fps == 0 {
        eprintln!("Error: --fps must be positive");
        std::process::exit(1);
    }
    let dt = 1.0 / cli.fps as f32;

    let mut world = World::new();
    setup_world(&mut world, config);
    start_new_game(&mut world);

    let mut update = build_schedule();
    let mut autopilot = Autopilot::new(cli.seed);
    let mut last_level = 0;
    let mut frames = 0;

    // --------------- Main loop ---------------
    while frames < cli.frames {
        autopilot.act(&mut world);
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
        autopilot.react(&mut world);
        frames += 1;

        let level = world.resource::<ProgressionState>().level;
        if level != last_level {
            let hud = world.resource::<Hud>();
            log::info!(
                "frame {}: level {} score {} lives {}",
                frames,
                level,
                hud.score_text,
                hud.lives_text
            );
            last_level = level;
        }

        if matches!(
            world.resource::<GameState>().get(),
            GameStates::Won | GameStates::Lost
        ) {
            break;
        }
    }

    let outcome = world.resource::<GameState>().get().clone();
    let progression = world.resource::<ProgressionState>();
    println!(
        "outcome={:?} level={} score={} lives={} frames={}",
        outcome, progression.level, progression.score, progression.lives, frames
    );
}
