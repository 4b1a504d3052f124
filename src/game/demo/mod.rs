// Terminal frontend for the game. Provides submodules for keyboard input,
// rendering snapshots, and the real-time loop tying them to a session.
pub mod game_loop;
pub mod input;
pub mod render;
