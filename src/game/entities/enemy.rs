use serde::{Deserialize, Serialize};

use crate::config::level::ENEMY_SPAWNS;
use crate::game::grid::{GridMap, Mover};
use crate::game::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Position,
}

impl Enemy {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    /// Step one tile in `direction` when the grid allows it. Enemies hold no
    /// keys, so locked doors always block them.
    pub fn patrol(&mut self, direction: Direction, grid: &mut GridMap) -> bool {
        match self.pos.step(direction) {
            Some(target) if grid.is_valid_move(target, Mover::Enemy) => {
                self.pos = target;
                true
            }
            _ => false,
        }
    }
}

/// Enemies placed in the level at session start.
pub fn spawn_level_enemies() -> Vec<Enemy> {
    ENEMY_SPAWNS.iter().map(|&pos| Enemy::new(pos)).collect()
}
