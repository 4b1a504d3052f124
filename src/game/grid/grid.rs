//! Tile grid of the level.
//!
//! Owns the maze layout and the exit, and decides which moves are legal.
//! Crossing a locked door with a key is the only way the layout changes.

use log::info;
use serde::Serialize;

use crate::config::level::{EXIT, LEVEL_MAP};
use crate::game::types::{Position, Tile};

/// Who is asking to enter a tile. Only the player carries keys.
pub enum Mover<'a> {
    Player { keys: &'a mut u32 },
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridMap {
    tiles: Vec<Vec<Tile>>,
    exit: Position,
}

impl GridMap {
    /// Build a grid from rows of tiles. Rows are expected to share one width.
    pub fn new(tiles: Vec<Vec<Tile>>, exit: Position) -> Self {
        Self { tiles, exit }
    }

    /// The fixed game level.
    pub fn level() -> Self {
        let tiles = LEVEL_MAP
            .iter()
            .map(|row| row.iter().map(|&code| Tile::from_code(code)).collect())
            .collect();
        Self::new(tiles, EXIT)
    }

    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Tile at `pos`, or `None` outside the grid.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Whether `mover` may enter `target`.
    ///
    /// A player holding at least one key opens a locked door: one key is
    /// consumed and the tile becomes open for the rest of the session.
    pub fn is_valid_move(&mut self, target: Position, mover: Mover<'_>) -> bool {
        let Some(tile) = self.tile(target) else {
            return false;
        };

        match (tile, mover) {
            (Tile::Open, _) => true,
            (Tile::Wall, _) => false,
            (Tile::LockedDoor, Mover::Player { keys }) if *keys > 0 => {
                *keys -= 1;
                self.tiles[target.y][target.x] = Tile::Open;
                info!(
                    "[GridMap] Door at ({}, {}) unlocked, {} key(s) left",
                    target.x, target.y, keys
                );
                true
            }
            (Tile::LockedDoor, _) => false,
        }
    }
}
