//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as the time limit,
//! damage cadence, item effects and the frame rate of the terminal loop.

use std::time::Duration;

/// Time allowed for a whole session, in seconds.
pub const TIME_LIMIT_SECS: u64 = 300;

/// Minimum time between two damage applications on the player.
pub const DAMAGE_COOLDOWN: Duration = Duration::from_millis(500);

/// Period of the passive health drain.
pub const HEALTH_DRAIN_PERIOD: Duration = Duration::from_secs(10);

/// Health lost on each passive drain.
pub const HEALTH_DRAIN_DAMAGE: u32 = 1;

/// Health lost when an enemy shares the player's tile.
pub const ENEMY_DAMAGE: u32 = 10;

/// Health restored by a potion.
pub const POTION_HEAL: u32 = 20;

/// Player health at spawn, also the upper bound.
pub const MAX_HEALTH: u32 = 100;

/// Treasures required before the exit counts as a win.
pub const TREASURES_TO_WIN: u32 = 3;

/// Enemies patrol on a tick with probability 1 / PATROL_ODDS.
pub const PATROL_ODDS: u32 = 10;

/// Target ticks per second of the main loop.
pub const TICK_RATE: u64 = 60;

/// High score file, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
