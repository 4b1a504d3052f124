//! Level configuration.
//!
//! The single fixed maze, the exit, and every spawn point. Tile codes:
//! 0 = open, 1 = wall, 2 = locked door.

use crate::game::types::{ItemKind, Position};

/// Number of columns in the level.
pub const LEVEL_WIDTH: usize = 20;

/// Number of rows in the level.
pub const LEVEL_HEIGHT: usize = 15;

pub const LEVEL_MAP: [[u8; LEVEL_WIDTH]; LEVEL_HEIGHT] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// The exit sits on the locked door.
pub const EXIT: Position = Position { x: 18, y: 13 };

pub const PLAYER_SPAWN: Position = Position { x: 1, y: 1 };

pub const ITEM_SPAWNS: [(ItemKind, Position); 7] = [
    (ItemKind::Potion, Position { x: 3, y: 2 }),
    (ItemKind::Key, Position { x: 5, y: 5 }),
    (ItemKind::Treasure, Position { x: 10, y: 10 }),
    (ItemKind::Potion, Position { x: 15, y: 3 }),
    (ItemKind::Key, Position { x: 8, y: 12 }),
    (ItemKind::Treasure, Position { x: 3, y: 9 }),
    (ItemKind::Treasure, Position { x: 17, y: 7 }),
];

pub const ENEMY_SPAWNS: [Position; 3] = [
    Position { x: 10, y: 5 },
    Position { x: 15, y: 11 },
    Position { x: 5, y: 13 },
];
