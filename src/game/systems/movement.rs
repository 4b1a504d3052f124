//! Movement system.
//!
//! Player steps come from input; enemies patrol on random ticks.

use crate::game::entities::{Enemy, Player};
use crate::game::grid::GridMap;
use crate::game::random::RandomSource;
use crate::game::types::Direction;

/// Move the player one tile in the given direction, if legal.
pub fn move_player(player: &mut Player, direction: Direction, grid: &mut GridMap) -> bool {
    player.move_by(direction, grid)
}

/// On a successful patrol roll every enemy takes one step in its own random
/// direction. Returns whether the roll succeeded.
pub fn patrol_enemies(enemies: &mut [Enemy], grid: &mut GridMap, source: &mut dyn RandomSource) -> bool {
    if !source.roll_patrol() {
        return false;
    }
    for enemy in enemies.iter_mut() {
        let direction = source.patrol_direction();
        enemy.patrol(direction, grid);
    }
    true
}
