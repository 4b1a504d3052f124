pub mod clock;
pub mod collision;
pub mod movement;
pub mod rules;

pub use clock::*;
pub use collision::*;
pub use movement::*;
pub use rules::*;
