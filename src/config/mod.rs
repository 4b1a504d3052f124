//! Main configuration module.
//!
//! Re-exports submodules for gameplay tuning and the level layout.

pub mod game;
pub mod level;
