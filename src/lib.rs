//! Treasure hunt: a single-player tile-grid game.
//!
//! `game` holds the rules and the session loop, `store` the high score file,
//! and `config` the tuning constants and the level.

pub mod config;
pub mod game;
pub mod store;
