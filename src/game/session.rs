//! One play-through of the level.
//!
//! The session owns the grid, every entity and the clock, applies player
//! intents, runs the per-tick update and decides when the game is won or lost.

use std::time::Instant;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::game::HEALTH_DRAIN_DAMAGE;
use crate::config::level::PLAYER_SPAWN;
use crate::game::entities::{Enemy, Item, Player, spawn_level_enemies, spawn_level_items};
use crate::game::grid::GridMap;
use crate::game::random::RandomSource;
use crate::game::snapshot::Snapshot;
use crate::game::systems::{
    SessionClock, final_score, has_won, move_player, patrol_enemies, resolve_collisions,
};
use crate::game::types::{GameState, Intent, ItemKind, Position};
use crate::store::ScoreStore;

pub struct GameSession {
    pub id: Uuid,
    grid: GridMap,
    player: Player,
    items: Vec<Item>,
    enemies: Vec<Enemy>,
    clock: SessionClock,
    state: GameState,
    best_score: u32,
    score: Option<u32>,
    random: Box<dyn RandomSource>,
}

impl GameSession {
    /// Start a session on the fixed level.
    pub fn new(random: Box<dyn RandomSource>, best_score: u32, now: Instant) -> Self {
        Self::with_world(
            GridMap::level(),
            PLAYER_SPAWN,
            spawn_level_items(),
            spawn_level_enemies(),
            random,
            best_score,
            now,
        )
    }

    /// Start a session on an arbitrary world.
    pub fn with_world(
        grid: GridMap,
        player_spawn: Position,
        items: Vec<Item>,
        enemies: Vec<Enemy>,
        random: Box<dyn RandomSource>,
        best_score: u32,
        now: Instant,
    ) -> Self {
        let id = Uuid::new_v4();
        info!(
            "[GameSession] Started session={} items={} enemies={} best={}",
            id,
            items.len(),
            enemies.len(),
            best_score
        );
        Self {
            id,
            grid,
            player: Player::new(player_spawn),
            items,
            enemies,
            clock: SessionClock::start(now),
            state: GameState::Playing,
            best_score,
            score: None,
            random,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Restart is only offered once the session is over.
    pub fn can_restart(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Apply a gameplay intent. Only movement and potion use affect the
    /// session, and only while playing. Returns whether anything changed.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        match intent {
            Intent::Move(direction) => move_player(&mut self.player, direction, &mut self.grid),
            Intent::UsePotion => self.player.use_item(ItemKind::Potion),
            Intent::Restart | Intent::Quit => false,
        }
    }

    /// Advance the simulation to `now`. Does nothing once the game is over.
    pub fn update(&mut self, now: Instant, scores: &mut dyn ScoreStore) {
        if self.state != GameState::Playing {
            return;
        }

        patrol_enemies(&mut self.enemies, &mut self.grid, &mut *self.random);
        resolve_collisions(&mut self.player, &mut self.items, &self.enemies, now);

        if self.clock.drain_due(now) {
            self.player.take_damage(HEALTH_DRAIN_DAMAGE, now);
        }

        let elapsed = self.clock.elapsed(now);
        if self.clock.is_over_time(now) {
            info!("[GameSession] session={} ran out of time", self.id);
            self.finish(GameState::Lost, now);
            return;
        }

        if has_won(&self.player, self.grid.exit()) {
            let score = final_score(elapsed, self.player.health);
            self.score = Some(score);
            match scores.write_if_greater(score) {
                Ok(true) => self.best_score = score,
                Ok(false) => {}
                Err(err) => warn!("[GameSession] session={} could not save score: {}", self.id, err),
            }
            info!(
                "[GameSession] session={} won in {:.1}s with health={} score={}",
                self.id,
                elapsed.as_secs_f64(),
                self.player.health,
                score
            );
            self.finish(GameState::Won, now);
            return;
        }

        if !self.player.is_alive() {
            info!("[GameSession] session={} player died", self.id);
            self.finish(GameState::Lost, now);
        }
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self, now: Instant) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            player: &self.player,
            items: &self.items,
            enemies: &self.enemies,
            state: self.state,
            elapsed_secs: self.clock.elapsed(now).as_secs_f64(),
            time_left_secs: self.clock.time_left_secs(now),
            best_score: self.best_score,
            score: self.score,
        }
    }

    fn finish(&mut self, state: GameState, now: Instant) {
        self.state = state;
        match serde_json::to_string(&self.snapshot(now)) {
            Ok(json) => debug!("[GameSession] Final snapshot session={}: {}", self.id, json),
            Err(err) => warn!("[GameSession] session={} snapshot serialization failed: {}", self.id, err),
        }
    }
}
