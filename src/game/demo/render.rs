//! Game rendering system (terminal).
//!
//! Draws the maze, entities and the HUD from a session snapshot, and owns the
//! terminal modes for the lifetime of the game.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;

use crate::config::game::TREASURES_TO_WIN;
use crate::game::snapshot::Snapshot;
use crate::game::types::{GameState, ItemKind, Position, Tile};

/// Consumer of one snapshot per tick.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// Raw mode and alternate screen, restored when dropped.
pub struct TerminalContext;

impl TerminalContext {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalContext {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            warn!("[Render] Could not leave alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("[Render] Could not disable raw mode: {}", err);
        }
    }
}

/// Draws two terminal columns per tile.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell(snapshot: &Snapshot<'_>, pos: Position, tile: Tile) -> (&'static str, Color) {
        if snapshot.player.pos == pos {
            return ("@@", Color::Blue);
        }
        if snapshot.enemies.iter().any(|enemy| enemy.pos == pos) {
            return ("EE", Color::Red);
        }
        if let Some(item) = snapshot.items.iter().find(|item| item.pos == pos) {
            return match item.kind {
                ItemKind::Potion => ("++", Color::Green),
                ItemKind::Key => ("k~", Color::DarkYellow),
                ItemKind::Treasure => ("$$", Color::Yellow),
            };
        }
        match tile {
            Tile::Open => ("  ", Color::Reset),
            Tile::Wall => ("██", Color::Grey),
            Tile::LockedDoor => ("▒▒", Color::DarkRed),
        }
    }

    fn line(&mut self, row: u16, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let mut row: u16 = 0;
        self.line(row, &format!("Health: {}", snapshot.health()), Color::White)?;
        row += 1;
        self.line(row, &format!("Time: {}", snapshot.time_left_secs), Color::White)?;
        row += 1;
        self.line(
            row,
            &format!(
                "Inventory: {} (Potions: {}, Keys: {})",
                snapshot.inventory_len(),
                snapshot.potions(),
                snapshot.keys()
            ),
            Color::White,
        )?;
        row += 1;
        self.line(
            row,
            &format!(
                "Treasures: {}/{}   Best: {}",
                snapshot.treasures(),
                TREASURES_TO_WIN,
                snapshot.best_score
            ),
            Color::White,
        )?;
        row += 2;

        for (y, tiles) in snapshot.grid.rows().iter().enumerate() {
            queue!(self.out, MoveTo(0, row))?;
            for (x, &tile) in tiles.iter().enumerate() {
                let (symbol, color) = Self::cell(snapshot, Position::new(x, y), tile);
                queue!(self.out, SetForegroundColor(color), Print(symbol))?;
            }
            queue!(self.out, ResetColor)?;
            row += 1;
        }
        row += 1;

        match snapshot.state {
            GameState::Playing => self.line(row, "WASD/arrows move, P potion, Q quit", Color::DarkGrey)?,
            GameState::Won => {
                let score = snapshot.score.unwrap_or_default();
                self.line(row, &format!("You Win! Score: {}. Press R to Restart", score), Color::Green)?
            }
            GameState::Lost => self.line(row, "Game Over! Press R to Restart", Color::Red)?,
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::game::random::scripted::ScriptedSource;
    use crate::game::session::GameSession;

    #[test]
    fn test_draw_writes_hud_and_maze() {
        let now = Instant::now();
        let session = GameSession::new(Box::new(ScriptedSource::idle()), 12, now);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&session.snapshot(now)).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("Health: 100"));
        assert!(text.contains("Time: 300"));
        assert!(text.contains("Inventory: 0 (Potions: 0, Keys: 0)"));
        assert!(text.contains("Treasures: 0/3   Best: 12"));
        assert!(text.contains("@@"));
        assert!(text.contains("EE"));
        assert!(text.contains("$$"));
        assert!(text.contains("▒▒"));
    }
}
