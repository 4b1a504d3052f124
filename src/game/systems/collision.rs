//! Per-tick collision resolution between the player and other entities.

use std::time::Instant;

use log::debug;

use crate::config::game::ENEMY_DAMAGE;
use crate::game::entities::{Enemy, Item, Player};

/// Collect every item under the player, then apply one enemy hit if any enemy
/// shares the player's tile. Items always resolve first.
pub fn resolve_collisions(player: &mut Player, items: &mut Vec<Item>, enemies: &[Enemy], now: Instant) {
    let (picked, remaining): (Vec<Item>, Vec<Item>) =
        items.drain(..).partition(|item| item.pos == player.pos);
    *items = remaining;
    for item in picked {
        player.collect_item(item);
    }

    if enemies.iter().any(|enemy| enemy.pos == player.pos) && player.take_damage(ENEMY_DAMAGE, now) {
        debug!("[Collision] Enemy hit at ({}, {}), health={}", player.pos.x, player.pos.y, player.health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::game::types::{ItemKind, Position};

    #[test]
    fn test_items_under_player_are_collected_once() {
        let now = Instant::now();
        let mut player = Player::new(Position::new(2, 2));
        let mut items = vec![
            Item::new(ItemKind::Treasure, Position::new(2, 2)),
            Item::new(ItemKind::Key, Position::new(2, 2)),
            Item::new(ItemKind::Potion, Position::new(3, 2)),
        ];

        resolve_collisions(&mut player, &mut items, &[], now);
        assert_eq!(player.treasures, 1);
        assert_eq!(player.keys, 1);
        assert_eq!(items, vec![Item::new(ItemKind::Potion, Position::new(3, 2))]);

        resolve_collisions(&mut player, &mut items, &[], now + Duration::from_secs(1));
        assert_eq!(player.treasures, 1);
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn test_overlapping_enemies_hit_once() {
        let now = Instant::now();
        let mut player = Player::new(Position::new(2, 2));
        let enemies = [Enemy::new(Position::new(2, 2)), Enemy::new(Position::new(2, 2))];

        resolve_collisions(&mut player, &mut Vec::new(), &enemies, now);
        assert_eq!(player.health, 90);

        // Still standing on them inside the cooldown window.
        resolve_collisions(&mut player, &mut Vec::new(), &enemies, now + Duration::from_millis(100));
        assert_eq!(player.health, 90);
    }

    #[test]
    fn test_distant_enemy_does_nothing() {
        let mut player = Player::new(Position::new(2, 2));
        let enemies = [Enemy::new(Position::new(2, 3))];
        resolve_collisions(&mut player, &mut Vec::new(), &enemies, Instant::now());
        assert_eq!(player.health, 100);
    }
}
