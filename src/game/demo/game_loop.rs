//! Real-time game loop for the terminal.
//!
//! Each tick reads pending key presses, advances the session and draws a
//! frame, at a fixed target rate.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::game::{HIGH_SCORE_FILE, TICK_RATE};
use crate::game::demo::input::read_intents;
use crate::game::demo::render::{Renderer, TerminalContext, TerminalRenderer};
use crate::game::random::RngSource;
use crate::game::session::GameSession;
use crate::game::types::Intent;
use crate::store::{FileScoreStore, ScoreStore};

fn new_session(scores: &dyn ScoreStore) -> GameSession {
    GameSession::new(Box::new(RngSource::thread()), scores.read_best(), Instant::now())
}

/// Run sessions until the player quits.
pub fn run_game_loop() -> io::Result<()> {
    let mut scores = FileScoreStore::new(HIGH_SCORE_FILE);
    if let Err(err) = scores.ensure_exists() {
        warn!("[GameLoop] {}", err);
    }
    info!("[GameLoop] High scores in {}", scores.path().display());

    let _terminal = TerminalContext::enter()?;
    let mut renderer = TerminalRenderer::new(io::stdout());
    let tick = Duration::from_secs(1) / TICK_RATE as u32;
    let mut session = new_session(&scores);

    loop {
        let frame_start = Instant::now();

        for intent in read_intents()? {
            match intent {
                Intent::Quit => {
                    info!("[GameLoop] Quit requested");
                    return Ok(());
                }
                Intent::Restart if session.can_restart() => {
                    info!("[GameLoop] Restarting after {:?}", session.state());
                    session = new_session(&scores);
                }
                other => {
                    session.apply_intent(other);
                }
            }
        }

        let now = Instant::now();
        session.update(now, &mut scores);
        renderer.draw(&session.snapshot(now))?;

        if let Some(rest) = tick.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
