//! Game entities module.
//!
//! This module organizes player, enemy and item entity logic.

pub mod enemy;
pub mod item;
pub mod player;

pub use enemy::*;
pub use item::*;
pub use player::*;
