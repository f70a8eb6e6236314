//! Enemy patrol movement.
//!
//! Each [`Enemy`] walks along x at its `move_speed`, turning around when it
//! reaches either end of its patrol range.

use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

pub fn enemy_patrol_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut Enemy)>,
) {
    let dt = world_time.delta;
    for (mut pos, mut enemy) in query.iter_mut() {
        pos.x += enemy.move_speed * enemy.direction * dt;
        if pos.x <= enemy.patrol_start {
            enemy.direction = 1.0;
        }
        if pos.x >= enemy.patrol_end {
            enemy.direction = -1.0;
        }
    }
}
