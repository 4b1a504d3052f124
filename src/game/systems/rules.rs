use std::time::Duration;

use crate::config::game::{MAX_HEALTH, TIME_LIMIT_SECS, TREASURES_TO_WIN};
use crate::game::entities::Player;
use crate::game::types::Position;

/// All treasures in hand and standing on the exit.
pub fn has_won(player: &Player, exit: Position) -> bool {
    player.treasures == TREASURES_TO_WIN && player.pos == exit
}

/// Remaining time weighted by remaining health, rounded, never negative.
pub fn final_score(elapsed: Duration, health: u32) -> u32 {
    let remaining = TIME_LIMIT_SECS as f64 - elapsed.as_secs_f64();
    let score = remaining * f64::from(health) / f64::from(MAX_HEALTH);
    score.round().max(0.0) as u32
}
