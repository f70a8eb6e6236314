//! HUD text system.
//!
//! Mirrors [`ProgressionState`] into the [`Hud`] resource. The write goes
//! through `set_if_neq`, so hosts can use change detection on [`Hud`] to
//! redraw text only when it actually changed.

use bevy_ecs::prelude::*;

use crate::resources::hud::Hud;
use crate::resources::progression::ProgressionState;
use crate::resources::worldtime::WorldTime;

/// Seconds per flash phase while invulnerable.
const FLASH_PERIOD: f32 = 0.1;

pub fn update_hud_system(
    progression: Res<ProgressionState>,
    world_time: Res<WorldTime>,
    mut hud: ResMut<Hud>,
) {
    let now = world_time.elapsed;
    let player_flashing = match progression.invulnerable_until {
        Some(until) if now < until => ((until - now) / FLASH_PERIOD) as u32 % 2 == 1,
        _ => false,
    };
    hud.set_if_neq(Hud {
        score_text: progression.score.to_string(),
        lives_text: Hud::lives_text(progression.lives),
        player_flashing,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::progressionconfig::ProgressionConfig;

    fn world_with(progression: ProgressionState, elapsed: f32) -> World {
        let mut world = World::new();
        world.insert_resource(progression);
        world.insert_resource(WorldTime {
            elapsed,
            ..WorldTime::default()
        });
        world.insert_resource(Hud::default());
        world
    }

    fn run(world: &mut World) -> Hud {
        let mut schedule = Schedule::default();
        schedule.add_systems(update_hud_system);
        schedule.run(world);
        world.resource::<Hud>().clone()
    }

    #[test]
    fn hud_mirrors_score_and_lives() {
        let config = ProgressionConfig::new();
        let mut p = ProgressionState::new(&config);
        p.score = 140;
        p.lives = 2;
        let hud = run(&mut world_with(p, 0.0));
        assert_eq!(hud.score_text, "140");
        assert_eq!(hud.lives_text, "♥♥");
        assert!(!hud.player_flashing);
    }

    #[test]
    fn player_flashes_only_inside_the_window() {
        let config = ProgressionConfig::new();
        let mut p = ProgressionState::new(&config);
        p.invulnerable_until = Some(1.0);

        // 0.15 s left: second phase of the 0.1 s flash cycle.
        assert!(run(&mut world_with(p.clone(), 0.85)).player_flashing);
        // 0.05 s left: first phase.
        assert!(!run(&mut world_with(p.clone(), 0.95)).player_flashing);
        assert!(!run(&mut world_with(p, 1.2)).player_flashing);
    }
}
