//! Read-only view of a session handed to the renderer once per tick.

use serde::Serialize;

use crate::game::entities::{Enemy, Item, Player};
use crate::game::grid::GridMap;
use crate::game::types::{GameState, ItemKind};

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub grid: &'a GridMap,
    pub player: &'a Player,
    pub items: &'a [Item],
    pub enemies: &'a [Enemy],
    pub state: GameState,
    pub elapsed_secs: f64,
    pub time_left_secs: u64,
    pub best_score: u32,
    /// Score of this session, set once it is won.
    pub score: Option<u32>,
}

impl Snapshot<'_> {
    pub fn health(&self) -> u32 {
        self.player.health
    }

    pub fn treasures(&self) -> u32 {
        self.player.treasures
    }

    pub fn keys(&self) -> u32 {
        self.player.keys
    }

    pub fn potions(&self) -> usize {
        self.player.count(ItemKind::Potion)
    }

    pub fn inventory_len(&self) -> usize {
        self.player.inventory.len()
    }
}
