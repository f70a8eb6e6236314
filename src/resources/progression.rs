//! Progression state resource.
//!
//! [`ProgressionState`] is the single authoritative record of a running game:
//! level, score, lives, the section-transition busy flag and the
//! invulnerability window. All mutation goes through its methods, which are
//! pure arithmetic over the state plus a [`ProgressionConfig`]; no ECS access
//! is needed, so the rules can be tested without a world.
//!
//! Time-dependent rules take the current world time (`now`, seconds) as an
//! argument instead of running timers.

use bevy_ecs::prelude::Resource;
use log::{debug, info};

use crate::resources::progressionconfig::ProgressionConfig;
use crate::section::SectionLayout;

/// Result of applying one damage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Lives remaining after the event.
    pub lives: u32,
    /// `true` once lives reached zero.
    pub game_over: bool,
    /// `false` when the hit was absorbed by the invulnerability window.
    pub applied: bool,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ProgressionState {
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    /// Set while a section scroll is in flight.
    pub section_in_progress: bool,
    /// World time at which the current invulnerability window closes.
    pub invulnerable_until: Option<f32>,
}

impl ProgressionState {
    /// Fresh state for a new game.
    pub fn new(config: &ProgressionConfig) -> Self {
        ProgressionState {
            level: 0,
            score: 0,
            lives: config.starting_lives,
            section_in_progress: false,
            invulnerable_until: None,
        }
    }

    /// A section is cleared once no enemy remains in it.
    pub fn is_section_cleared(live_enemy_count: usize) -> bool {
        live_enemy_count == 0
    }

    /// Layout of the opening section. Does not change level or score.
    pub fn initial_section(&self, config: &ProgressionConfig) -> SectionLayout {
        SectionLayout::generate(self.level, config)
    }

    /// Generate the next section at the current level, then move one level
    /// up and bank the section-clear bonus.
    ///
    /// Each call advances the state again; there is no replay.
    pub fn advance_section(&mut self, config: &ProgressionConfig) -> SectionLayout {
        let layout = SectionLayout::generate(self.level, config);
        self.level = self.level.saturating_add(1);
        self.score = self.score.saturating_add(config.section_clear_bonus);
        info!(
            "Section cleared: level {} score {} ({} enemies next)",
            self.level,
            self.score,
            layout.enemy_count()
        );
        layout
    }

    /// Mark a section transition as started.
    ///
    /// Returns `false` and leaves the state untouched if one is already running.
    pub fn begin_transition(&mut self) -> bool {
        if self.section_in_progress {
            return false;
        }
        self.section_in_progress = true;
        true
    }

    pub fn finish_transition(&mut self) {
        self.section_in_progress = false;
    }

    pub fn is_invulnerable(&self, now: f32) -> bool {
        self.invulnerable_until.is_some_and(|until| now < until)
    }

    /// Apply one hit at world time `now`.
    ///
    /// Hits inside the invulnerability window, or after the game is already
    /// lost, change nothing. Otherwise one life is removed and, if any remain,
    /// a new window of `invulnerability_seconds` starts.
    pub fn record_damage(&mut self, config: &ProgressionConfig, now: f32) -> DamageOutcome {
        if self.lives == 0 || self.is_invulnerable(now) {
            debug!("Damage ignored at t={:.2} (lives {})", now, self.lives);
            return DamageOutcome {
                lives: self.lives,
                game_over: self.lives == 0,
                applied: false,
            };
        }

        self.lives -= 1;
        let game_over = self.lives == 0;
        if game_over {
            self.invulnerable_until = None;
        } else {
            self.invulnerable_until = Some(now + config.invulnerability_seconds);
        }
        info!("Player hit: {} lives left", self.lives);
        DamageOutcome {
            lives: self.lives,
            game_over,
            applied: true,
        }
    }

    pub fn record_coin(&mut self, value: u32) -> u32 {
        self.score = self.score.saturating_add(value);
        self.score
    }

    pub fn record_enemy_defeat(&mut self, config: &ProgressionConfig) -> u32 {
        self.score = self.score.saturating_add(config.kill_bonus);
        self.score
    }

    /// The game is won on reaching the target score or the final level.
    pub fn check_win_condition(&self, config: &ProgressionConfig) -> bool {
        self.score >= config.win_score || self.level >= config.max_level
    }
}
