//! Section layouts and difficulty scaling.
//!
//! A section is one screen-high slice of the climb. Each time a section is
//! cleared a fresh [`SectionLayout`] is produced from a fixed template whose
//! parameters come from [`Difficulty::for_level`]. Layouts are plain data: the
//! host turns each [`PlacementCommand`] into an entity (see
//! [`crate::systems::section::spawn_layout`]).
//!
//! Everything here is deterministic; the same level and configuration always
//! yield the same layout.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::resources::progressionconfig::ProgressionConfig;

/// Height of every generated platform.
pub const PLATFORM_HEIGHT: f32 = 20.0;
/// Width and height of each floor segment.
pub const FLOOR_SEGMENT: (f32, f32) = (200.0, 40.0);

/// Level-scaled generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Difficulty {
    pub platform_width: f32,
    pub gap_increase: f32,
    pub enemy_count: u32,
    pub enemy_speed: f32,
    pub coin_value: u32,
}

impl Difficulty {
    /// Compute the parameters for `level`.
    ///
    /// Platform width shrinks towards `min_platform_width`; gaps, enemy count
    /// and enemy speed grow until their configured maxima.
    pub fn for_level(level: u32, config: &ProgressionConfig) -> Self {
        let lvl = level as f32;
        let platform_width = (config.base_platform_width - config.width_decrease_per_level * lvl)
            .max(config.min_platform_width);
        let gap_increase = (config.gap_increase_per_level * lvl).min(config.max_gap_increase);
        let enemy_count = config
            .base_enemy_count
            .saturating_add(level / 2)
            .min(config.max_enemy_count);
        let enemy_speed = (config.base_enemy_speed + config.speed_increase_per_level * lvl)
            .min(config.max_enemy_speed);
        let coin_value = config
            .base_coin_value
            .saturating_add(config.coin_value_increase_per_level.saturating_mul(level));
        Difficulty {
            platform_width,
            gap_increase,
            enemy_count,
            enemy_speed,
            coin_value,
        }
    }
}

/// A single entity the host should instantiate.
///
/// Positions are the entity's top-left corner in world pixels, y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementCommand {
    Platform {
        x: f32,
        y: f32,
        width: f32,
        is_special: bool,
    },
    Enemy {
        x: f32,
        y: f32,
        move_speed: f32,
        patrol_start: f32,
        patrol_end: f32,
    },
    Coin {
        x: f32,
        y: f32,
        value: u32,
    },
    /// Static ground segment. Laid once per game and never scrolled.
    Floor {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl PlacementCommand {
    pub fn position(&self) -> (f32, f32) {
        match *self {
            PlacementCommand::Platform { x, y, .. }
            | PlacementCommand::Enemy { x, y, .. }
            | PlacementCommand::Coin { x, y, .. }
            | PlacementCommand::Floor { x, y, .. } => (x, y),
        }
    }

    /// Reject commands no entity could be built from.
    pub fn validate(&self) -> Result<(), PlacementError> {
        let (x, y) = self.position();
        if !x.is_finite() || !y.is_finite() {
            return Err(PlacementError::NonFinitePosition { x, y });
        }
        match *self {
            PlacementCommand::Platform { width, .. } if width.is_nan() || width <= 0.0 => {
                Err(PlacementError::InvalidSize {
                    width,
                    height: PLATFORM_HEIGHT,
                })
            }
            PlacementCommand::Floor { width, height, .. }
                if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 =>
            {
                Err(PlacementError::InvalidSize { width, height })
            }
            PlacementCommand::Enemy {
                move_speed,
                patrol_start,
                patrol_end,
                ..
            } => {
                if !move_speed.is_finite() || move_speed < 0.0 {
                    Err(PlacementError::InvalidSpeed(move_speed))
                } else if patrol_start.is_nan() || patrol_end.is_nan() || patrol_start > patrol_end {
                    Err(PlacementError::InvertedPatrol {
                        start: patrol_start,
                        end: patrol_end,
                    })
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

/// Why a placement could not be turned into an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    NonFinitePosition { x: f32, y: f32 },
    InvalidSize { width: f32, height: f32 },
    InvalidSpeed(f32),
    InvertedPatrol { start: f32, end: f32 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NonFinitePosition { x, y } => {
                write!(f, "position ({}, {}) is not finite", x, y)
            }
            PlacementError::InvalidSize { width, height } => {
                write!(f, "size {}x{} must be positive", width, height)
            }
            PlacementError::InvalidSpeed(speed) => write!(f, "invalid move speed {}", speed),
            PlacementError::InvertedPatrol { start, end } => {
                write!(f, "patrol range {}..{} is inverted", start, end)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Commands making up one generated section, in spawn order.
pub type Placements = SmallVec<[PlacementCommand; 16]>;

/// The ordered, immutable content of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLayout {
    /// Level the section was generated for.
    pub level: u32,
    pub difficulty: Difficulty,
    pub commands: Placements,
}

impl SectionLayout {
    /// Build the section template for `level`.
    pub fn generate(level: u32, config: &ProgressionConfig) -> Self {
        let difficulty = Difficulty::for_level(level, config);
        let w = config.world_width;
        let h = config.world_height;
        let g = difficulty.gap_increase;
        let pw = difficulty.platform_width;

        let mut commands = Placements::new();

        for (x, y) in [
            (50.0, h - 120.0),
            (180.0 + g, h - 180.0),
            (310.0 + g, h - 240.0),
            (w - 130.0, h - 120.0),
            (w - 260.0 - g, h - 180.0),
            (w / 2.0 - 40.0, h - 200.0),
        ] {
            commands.push(PlacementCommand::Platform {
                x,
                y,
                width: pw,
                is_special: false,
            });
        }

        let n = difficulty.enemy_count;
        let spacing = w / n.saturating_add(1) as f32;
        for i in 0..n {
            let x = spacing * (i + 1) as f32 - 75.0;
            commands.push(PlacementCommand::Enemy {
                x,
                y: h - 60.0,
                move_speed: difficulty.enemy_speed,
                patrol_start: x,
                patrol_end: x + pw - 20.0,
            });
        }

        let mut coins = vec![
            (150.0, h - 150.0),
            (w - 150.0, h - 200.0),
            (w / 2.0, h - 250.0),
        ];
        if level > 2 {
            coins.push((w / 4.0, h - 300.0));
            coins.push((w * 3.0 / 4.0, h - 300.0));
        }
        for (x, y) in coins {
            commands.push(PlacementCommand::Coin {
                x,
                y,
                value: difficulty.coin_value,
            });
        }

        SectionLayout {
            level,
            difficulty,
            commands,
        }
    }

    /// Number of commands of the enemy variant.
    pub fn enemy_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PlacementCommand::Enemy { .. }))
            .count()
    }
}

/// The ground under the player's start: three segments with gaps between them.
pub fn floor_layout(config: &ProgressionConfig) -> Placements {
    let (fw, fh) = FLOOR_SEGMENT;
    let y = config.world_height - fh;
    [0.0, 300.0, config.world_width - fw]
        .into_iter()
        .map(|x| PlacementCommand::Floor {
            x,
            y,
            width: fw,
            height: fh,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn difficulty_at_level_zero_uses_base_values() {
        let config = ProgressionConfig::new();
        let d = Difficulty::for_level(0, &config);
        assert!(approx_eq(d.platform_width, 80.0));
        assert!(approx_eq(d.gap_increase, 0.0));
        assert_eq!(d.enemy_count, 3);
        assert!(approx_eq(d.enemy_speed, 120.0));
        assert_eq!(d.coin_value, 10);
    }

    #[test]
    fn difficulty_at_level_three() {
        let config = ProgressionConfig::new();
        let d = Difficulty::for_level(3, &config);
        assert_eq!(d.enemy_count, 4);
        assert!(approx_eq(d.platform_width, 74.0));
        assert!(approx_eq(d.gap_increase, 15.0));
        assert!(approx_eq(d.enemy_speed, 150.0));
        assert_eq!(d.coin_value, 25);
    }

    #[test]
    fn difficulty_is_monotonic_and_clamped() {
        let config = ProgressionConfig::new();
        let mut prev = Difficulty::for_level(0, &config);
        for level in 1..200 {
            let d = Difficulty::for_level(level, &config);
            assert!(d.platform_width <= prev.platform_width);
            assert!(d.platform_width >= config.min_platform_width);
            assert!(d.gap_increase >= prev.gap_increase);
            assert!(d.gap_increase <= config.max_gap_increase);
            assert!(d.enemy_count >= prev.enemy_count);
            assert!(d.enemy_count <= config.max_enemy_count);
            assert!(d.enemy_speed >= prev.enemy_speed);
            assert!(d.enemy_speed <= config.max_enemy_speed);
            prev = d;
        }
    }

    #[test]
    fn extreme_levels_do_not_overflow() {
        let config = ProgressionConfig::new();
        let d = Difficulty::for_level(u32::MAX, &config);
        assert_eq!(d.enemy_count, config.max_enemy_count);
        assert!(approx_eq(d.platform_width, config.min_platform_width));
        assert_eq!(d.coin_value, u32::MAX);
    }

    #[test]
    fn layout_contains_platforms_enemies_and_coins() {
        let config = ProgressionConfig::new();
        let layout = SectionLayout::generate(0, &config);
        let platforms = layout
            .commands
            .iter()
            .filter(|c| matches!(c, PlacementCommand::Platform { .. }))
            .count();
        let coins = layout
            .commands
            .iter()
            .filter(|c| matches!(c, PlacementCommand::Coin { .. }))
            .count();
        assert_eq!(platforms, 6);
        assert_eq!(layout.enemy_count(), 3);
        assert_eq!(coins, 3);
        assert!(layout.commands.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn bonus_coins_appear_after_level_two() {
        let config = ProgressionConfig::new();
        let coins = |level| {
            SectionLayout::generate(level, &config)
                .commands
                .iter()
                .filter(|c| matches!(c, PlacementCommand::Coin { .. }))
                .count()
        };
        assert_eq!(coins(2), 3);
        assert_eq!(coins(3), 5);
    }

    #[test]
    fn gap_offsets_shift_the_inner_platforms() {
        let config = ProgressionConfig::new();
        let layout = SectionLayout::generate(4, &config);
        let xs: Vec<f32> = layout
            .commands
            .iter()
            .filter_map(|c| match c {
                PlacementCommand::Platform { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert!(approx_eq(xs[0], 50.0));
        assert!(approx_eq(xs[1], 200.0));
        assert!(approx_eq(xs[2], 330.0));
        assert!(approx_eq(xs[4], 640.0 - 260.0 - 20.0));
    }

    #[test]
    fn enemy_patrol_spans_platform_width() {
        let config = ProgressionConfig::new();
        let layout = SectionLayout::generate(0, &config);
        let first = layout
            .commands
            .iter()
            .find(|c| matches!(c, PlacementCommand::Enemy { .. }))
            .copied();
        match first {
            Some(PlacementCommand::Enemy {
                x,
                y,
                patrol_start,
                patrol_end,
                move_speed,
            }) => {
                assert!(approx_eq(x, 160.0 - 75.0));
                assert!(approx_eq(y, 300.0));
                assert!(approx_eq(patrol_start, x));
                assert!(approx_eq(patrol_end, x + 60.0));
                assert!(approx_eq(move_speed, 120.0));
            }
            other => panic!("expected an enemy, got {:?}", other),
        }
    }

    #[test]
    fn floor_has_three_segments_on_the_bottom_edge() {
        let config = ProgressionConfig::new();
        let floor = floor_layout(&config);
        assert_eq!(floor.len(), 3);
        for cmd in &floor {
            let (_, y) = cmd.position();
            assert!(approx_eq(y, 320.0));
        }
    }

    #[test]
    fn validate_rejects_broken_commands() {
        let bad_pos = PlacementCommand::Coin {
            x: f32::NAN,
            y: 0.0,
            value: 1,
        };
        assert!(matches!(
            bad_pos.validate(),
            Err(PlacementError::NonFinitePosition { .. })
        ));

        let thin = PlacementCommand::Platform {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            is_special: false,
        };
        assert!(matches!(
            thin.validate(),
            Err(PlacementError::InvalidSize { .. })
        ));

        let inverted = PlacementCommand::Enemy {
            x: 0.0,
            y: 0.0,
            move_speed: 10.0,
            patrol_start: 50.0,
            patrol_end: 10.0,
        };
        assert!(matches!(
            inverted.validate(),
            Err(PlacementError::InvertedPatrol { .. })
        ));
    }

    #[test]
    fn layout_serializes_with_tagged_commands() {
        let config = ProgressionConfig::new();
        let layout = SectionLayout::generate(0, &config);
        let json = serde_json::to_string(&layout).expect("layout should serialize");
        assert!(json.contains("\"kind\":\"platform\""));
        assert!(json.contains("\"kind\":\"enemy\""));
        assert!(json.contains("\"kind\":\"coin\""));
    }
}
