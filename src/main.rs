//! Main entry point for the game.
//!
//! Initializes logging and runs the terminal game loop until the player quits.

use treasure_hunt::game::demo::game_loop::run_game_loop;

fn main() -> std::io::Result<()> {
    // Logs go to stderr; set RUST_LOG and redirect stderr to keep the screen clean.
    env_logger::init();

    run_game_loop()
}
