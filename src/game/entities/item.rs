//! Collectible items.

use serde::{Deserialize, Serialize};

use crate::config::game::{MAX_HEALTH, POTION_HEAL};
use crate::config::level::ITEM_SPAWNS;
use crate::game::entities::Player;
use crate::game::types::{ItemKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Position,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    /// Apply the item's effect to `player`. Keys are spent at doors and
    /// treasures only count toward the win, so neither does anything here.
    pub fn use_on(&self, player: &mut Player) {
        match self.kind {
            ItemKind::Potion => {
                player.health = (player.health + POTION_HEAL).min(MAX_HEALTH);
            }
            ItemKind::Key | ItemKind::Treasure => {}
        }
    }
}

/// Items placed in the level at session start.
pub fn spawn_level_items() -> Vec<Item> {
    ITEM_SPAWNS
        .iter()
        .map(|&(kind, pos)| Item::new(kind, pos))
        .collect()
}
