//! Progression configuration resource.
//!
//! Holds every tunable of the section generator and the progression rules.
//! Defaults match the shipped game; any value can be overridden from an INI
//! file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 640
//! height = 360
//!
//! [difficulty]
//! base_platform_width = 80
//! width_decrease_per_level = 2
//! min_platform_width = 60
//! gap_increase_per_level = 5
//! max_gap_increase = 100
//! base_enemy_count = 3
//! max_enemy_count = 6
//! base_enemy_speed = 120
//! speed_increase_per_level = 10
//! max_enemy_speed = 400
//!
//! [scoring]
//! base_coin_value = 10
//! coin_value_increase_per_level = 5
//! kill_bonus = 20
//! section_clear_bonus = 50
//! win_score = 1000
//! max_level = 10
//!
//! [player]
//! lives = 3
//! jump_force = 600
//! stomp_tolerance = 10
//!
//! [timing]
//! invulnerability_seconds = 1.5
//! scroll_step = 200
//! scroll_cooldown_seconds = 0.5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Tunables for section generation, scoring and player rules.
///
/// Lengths are in world pixels, speeds in pixels per second and durations in
/// seconds.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ProgressionConfig {
    /// Width of the visible section.
    pub world_width: f32,
    /// Height of the visible section.
    pub world_height: f32,

    pub base_platform_width: f32,
    pub width_decrease_per_level: f32,
    pub min_platform_width: f32,
    pub gap_increase_per_level: f32,
    pub max_gap_increase: f32,
    pub base_enemy_count: u32,
    pub max_enemy_count: u32,
    pub base_enemy_speed: f32,
    pub speed_increase_per_level: f32,
    pub max_enemy_speed: f32,

    pub base_coin_value: u32,
    pub coin_value_increase_per_level: u32,
    /// Score awarded for stomping an enemy.
    pub kill_bonus: u32,
    /// Score awarded each time a section scrolls away.
    pub section_clear_bonus: u32,
    pub win_score: u32,
    pub max_level: u32,

    /// Lives at the start of a game.
    pub starting_lives: u32,
    /// Base jump impulse; bounces and knockbacks are fractions of it.
    pub jump_force: f32,
    /// How far the player's feet may sink below an enemy's top and still count as a stomp.
    pub stomp_tolerance: f32,

    pub invulnerability_seconds: f32,
    /// Vertical distance every scrollable entity moves when a section clears.
    pub scroll_step: f32,
    /// Busy period after a scroll during which no further section may start.
    pub scroll_cooldown_seconds: f32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionConfig {
    pub fn new() -> Self {
        Self {
            world_width: 640.0,
            world_height: 360.0,
            base_platform_width: 80.0,
            width_decrease_per_level: 2.0,
            min_platform_width: 60.0,
            gap_increase_per_level: 5.0,
            max_gap_increase: 100.0,
            base_enemy_count: 3,
            max_enemy_count: 6,
            base_enemy_speed: 120.0,
            speed_increase_per_level: 10.0,
            max_enemy_speed: 400.0,
            base_coin_value: 10,
            coin_value_increase_per_level: 5,
            kill_bonus: 20,
            section_clear_bonus: 50,
            win_score: 1000,
            max_level: 10,
            starting_lives: 3,
            jump_force: 600.0,
            stomp_tolerance: 10.0,
            invulnerability_seconds: 1.5,
            scroll_step: 200.0,
            scroll_cooldown_seconds: 0.5,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a default configuration bound to a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str, slot: &mut f32| {
            if let Some(v) = config.getfloat(section, key).ok().flatten() {
                *slot = v as f32;
            }
        };
        let uint = |section: &str, key: &str, slot: &mut u32| {
            if let Some(v) = config.getuint(section, key).ok().flatten() {
                match u32::try_from(v) {
                    Ok(v) => *slot = v,
                    Err(_) => warn!("[{}] {} = {} is out of range, keeping {}", section, key, v, slot),
                }
            }
        };

        // [world] section
        float("world", "width", &mut self.world_width);
        float("world", "height", &mut self.world_height);

        // [difficulty] section
        float("difficulty", "base_platform_width", &mut self.base_platform_width);
        float(
            "difficulty",
            "width_decrease_per_level",
            &mut self.width_decrease_per_level,
        );
        float("difficulty", "min_platform_width", &mut self.min_platform_width);
        float(
            "difficulty",
            "gap_increase_per_level",
            &mut self.gap_increase_per_level,
        );
        float("difficulty", "max_gap_increase", &mut self.max_gap_increase);
        uint("difficulty", "base_enemy_count", &mut self.base_enemy_count);
        uint("difficulty", "max_enemy_count", &mut self.max_enemy_count);
        float("difficulty", "base_enemy_speed", &mut self.base_enemy_speed);
        float(
            "difficulty",
            "speed_increase_per_level",
            &mut self.speed_increase_per_level,
        );
        float("difficulty", "max_enemy_speed", &mut self.max_enemy_speed);

        // [scoring] section
        uint("scoring", "base_coin_value", &mut self.base_coin_value);
        uint(
            "scoring",
            "coin_value_increase_per_level",
            &mut self.coin_value_increase_per_level,
        );
        uint("scoring", "kill_bonus", &mut self.kill_bonus);
        uint("scoring", "section_clear_bonus", &mut self.section_clear_bonus);
        uint("scoring", "win_score", &mut self.win_score);
        uint("scoring", "max_level", &mut self.max_level);

        // [player] section
        uint("player", "lives", &mut self.starting_lives);
        float("player", "jump_force", &mut self.jump_force);
        float("player", "stomp_tolerance", &mut self.stomp_tolerance);

        // [timing] section
        float(
            "timing",
            "invulnerability_seconds",
            &mut self.invulnerability_seconds,
        );
        float("timing", "scroll_step", &mut self.scroll_step);
        float(
            "timing",
            "scroll_cooldown_seconds",
            &mut self.scroll_cooldown_seconds,
        );

        info!(
            "Loaded config: {}x{} world, lives={}, win at {} points or level {}",
            self.world_width, self.world_height, self.starting_lives, self.win_score, self.max_level
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("world", "width", self.world_width.to_string());
        set("world", "height", self.world_height.to_string());

        set("difficulty", "base_platform_width", self.base_platform_width.to_string());
        set(
            "difficulty",
            "width_decrease_per_level",
            self.width_decrease_per_level.to_string(),
        );
        set("difficulty", "min_platform_width", self.min_platform_width.to_string());
        set(
            "difficulty",
            "gap_increase_per_level",
            self.gap_increase_per_level.to_string(),
        );
        set("difficulty", "max_gap_increase", self.max_gap_increase.to_string());
        set("difficulty", "base_enemy_count", self.base_enemy_count.to_string());
        set("difficulty", "max_enemy_count", self.max_enemy_count.to_string());
        set("difficulty", "base_enemy_speed", self.base_enemy_speed.to_string());
        set(
            "difficulty",
            "speed_increase_per_level",
            self.speed_increase_per_level.to_string(),
        );
        set("difficulty", "max_enemy_speed", self.max_enemy_speed.to_string());

        set("scoring", "base_coin_value", self.base_coin_value.to_string());
        set(
            "scoring",
            "coin_value_increase_per_level",
            self.coin_value_increase_per_level.to_string(),
        );
        set("scoring", "kill_bonus", self.kill_bonus.to_string());
        set("scoring", "section_clear_bonus", self.section_clear_bonus.to_string());
        set("scoring", "win_score", self.win_score.to_string());
        set("scoring", "max_level", self.max_level.to_string());

        set("player", "lives", self.starting_lives.to_string());
        set("player", "jump_force", self.jump_force.to_string());
        set("player", "stomp_tolerance", self.stomp_tolerance.to_string());

        set(
            "timing",
            "invulnerability_seconds",
            self.invulnerability_seconds.to_string(),
        );
        set("timing", "scroll_step", self.scroll_step.to_string());
        set(
            "timing",
            "scroll_cooldown_seconds",
            self.scroll_cooldown_seconds.to_string(),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Where a player is put back after falling off the world.
    pub fn player_spawn(&self) -> (f32, f32) {
        (40.0, self.world_height - 80.0)
    }
}
