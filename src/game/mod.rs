pub mod random;
pub mod session;
pub mod snapshot;
pub mod types;

pub mod demo;
pub mod entities;
pub mod grid;
pub mod systems;
