//! Player entity logic.
//!
//! Movement through the grid, inventory, and damage with cooldown.

use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::config::game::{DAMAGE_COOLDOWN, MAX_HEALTH};
use crate::game::entities::Item;
use crate::game::grid::{GridMap, Mover};
use crate::game::types::{Direction, ItemKind, Position};

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Position,
    pub health: u32,
    /// Collected items in pickup order.
    pub inventory: Vec<Item>,
    /// Keys available for doors. Doors read this, never the inventory.
    pub keys: u32,
    pub treasures: u32,
    #[serde(skip)]
    pub last_damage_at: Option<Instant>,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            health: MAX_HEALTH,
            inventory: Vec::new(),
            keys: 0,
            treasures: 0,
            last_damage_at: None,
        }
    }

    /// Step one tile in `direction` if the grid allows it. May unlock a door.
    /// Returns whether the player moved.
    pub fn move_by(&mut self, direction: Direction, grid: &mut GridMap) -> bool {
        let Some(target) = self.pos.step(direction) else {
            return false;
        };
        if grid.is_valid_move(target, Mover::Player { keys: &mut self.keys }) {
            self.pos = target;
            true
        } else {
            false
        }
    }

    /// Take `item` into the inventory and update the counters.
    /// The caller is responsible for removing it from the world.
    pub fn collect_item(&mut self, item: Item) {
        match item.kind {
            ItemKind::Key => self.keys += 1,
            ItemKind::Treasure => self.treasures += 1,
            ItemKind::Potion => {}
        }
        debug!(
            "[Player] Collected {:?} at ({}, {})",
            item.kind, item.pos.x, item.pos.y
        );
        self.inventory.push(item);
    }

    /// Use and remove the first inventory item of `kind`.
    /// Returns false when the inventory holds none.
    pub fn use_item(&mut self, kind: ItemKind) -> bool {
        let Some(index) = self.inventory.iter().position(|item| item.kind == kind) else {
            return false;
        };
        let item = self.inventory.remove(index);
        item.use_on(self);
        debug!("[Player] Used {:?}, health={}", kind, self.health);
        true
    }

    /// Apply `amount` damage unless the last hit is younger than the cooldown.
    /// Returns whether damage was applied.
    pub fn take_damage(&mut self, amount: u32, now: Instant) -> bool {
        if let Some(last) = self.last_damage_at {
            if now.saturating_duration_since(last) < DAMAGE_COOLDOWN {
                return false;
            }
        }
        self.last_damage_at = Some(now);
        self.health = self.health.saturating_sub(amount);
        true
    }

    /// Number of inventory items of `kind`.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.inventory.iter().filter(|item| item.kind == kind).count()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::game::types::Tile;

    fn corridor() -> GridMap {
        // # . . D #
        GridMap::new(
            vec![vec![Tile::Wall, Tile::Open, Tile::Open, Tile::LockedDoor, Tile::Wall]],
            Position::new(3, 0),
        )
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut player = Player::new(Position::new(1, 0));
        player.health = 5;
        assert!(player.take_damage(10, Instant::now()));
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_take_damage_respects_cooldown() {
        let now = Instant::now();
        let mut player = Player::new(Position::new(1, 0));

        assert!(player.take_damage(10, now));
        assert!(!player.take_damage(10, now + Duration::from_millis(499)));
        assert_eq!(player.health, 90);

        assert!(player.take_damage(10, now + DAMAGE_COOLDOWN));
        assert_eq!(player.health, 80);
    }

    #[test]
    fn test_potion_heals_up_to_max() {
        let mut player = Player::new(Position::new(1, 0));
        player.health = 60;
        player.collect_item(Item::new(ItemKind::Potion, Position::new(0, 0)));
        assert!(player.use_item(ItemKind::Potion));
        assert_eq!(player.health, 80);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_potion_at_full_health_is_still_consumed() {
        let mut player = Player::new(Position::new(1, 0));
        player.collect_item(Item::new(ItemKind::Potion, Position::new(0, 0)));
        assert!(player.use_item(ItemKind::Potion));
        assert_eq!(player.health, MAX_HEALTH);
        assert_eq!(player.count(ItemKind::Potion), 0);
    }

    #[test]
    fn test_use_item_without_match() {
        let mut player = Player::new(Position::new(1, 0));
        player.collect_item(Item::new(ItemKind::Key, Position::new(0, 0)));
        assert!(!player.use_item(ItemKind::Potion));
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_use_item_takes_first_in_order() {
        let mut player = Player::new(Position::new(1, 0));
        player.collect_item(Item::new(ItemKind::Potion, Position::new(1, 1)));
        player.collect_item(Item::new(ItemKind::Key, Position::new(2, 2)));
        player.collect_item(Item::new(ItemKind::Potion, Position::new(3, 3)));

        player.use_item(ItemKind::Potion);
        assert_eq!(
            player.inventory,
            vec![
                Item::new(ItemKind::Key, Position::new(2, 2)),
                Item::new(ItemKind::Potion, Position::new(3, 3)),
            ]
        );
    }

    #[test]
    fn test_collect_counts() {
        let mut player = Player::new(Position::new(1, 0));
        player.collect_item(Item::new(ItemKind::Treasure, Position::new(0, 0)));
        player.collect_item(Item::new(ItemKind::Key, Position::new(0, 0)));
        assert_eq!(player.treasures, 1);
        assert_eq!(player.keys, 1);
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn test_move_blocked_by_wall_and_edge() {
        let mut grid = corridor();
        let mut player = Player::new(Position::new(1, 0));
        assert!(!player.move_by(Direction::Left, &mut grid));
        assert!(!player.move_by(Direction::Up, &mut grid));
        assert_eq!(player.pos, Position::new(1, 0));
    }

    #[test]
    fn test_keyless_player_cannot_cross_door() {
        let mut grid = corridor();
        let mut player = Player::new(Position::new(2, 0));
        assert!(!player.move_by(Direction::Right, &mut grid));
        assert_eq!(player.pos, Position::new(2, 0));
        assert_eq!(grid.tile(Position::new(3, 0)), Some(Tile::LockedDoor));
    }

    #[test]
    fn test_key_opens_door_and_player_moves_onto_it() {
        let mut grid = corridor();
        let mut player = Player::new(Position::new(2, 0));
        player.collect_item(Item::new(ItemKind::Key, Position::new(2, 0)));

        assert!(player.move_by(Direction::Right, &mut grid));
        assert_eq!(player.pos, Position::new(3, 0));
        assert_eq!(player.keys, 0);
        assert_eq!(grid.tile(Position::new(3, 0)), Some(Tile::Open));

        // The key stays in the inventory as a display entry.
        assert_eq!(player.count(ItemKind::Key), 1);

        assert!(player.move_by(Direction::Left, &mut grid));
        assert!(player.move_by(Direction::Right, &mut grid));
        assert_eq!(player.keys, 0);
    }
}
