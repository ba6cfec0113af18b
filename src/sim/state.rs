//! Game state aggregate
//!
//! All mutable session state lives here and is advanced strictly
//! sequentially by [`super::tick::tick`]. The two performer bodies are a
//! fixed two-element array addressed through the `flying`/`waiting` role
//! indices; a launch swaps the indices, never the bodies, so identity stays
//! stable.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Body, BodyRole};
use super::grid::TargetGrid;
use super::seesaw::Seesaw;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the action signal
    Menu,
    /// Active gameplay
    Playing,
    /// Between-level countdown
    LevelComplete,
    /// Run ended
    GameOver,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: i32,
    /// 1-based level counter
    pub level: u32,
    /// Best score seen so far (loaded by the driver, persisted on game over)
    pub high_score: u64,
    /// Score at which the next bonus life is granted
    pub next_bonus_at: u64,
    /// LevelComplete countdown, one unit per tick
    pub level_complete_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub seesaw: Seesaw,
    /// The two performers; index through `flying`/`waiting`
    pub bodies: [Body; 2],
    /// Index of the gravity-simulated body
    pub flying: usize,
    /// Index of the body parked on the seesaw's down side
    pub waiting: usize,
    pub grid: TargetGrid,
    rng: Pcg32,
}

impl GameState {
    /// Create a session sitting at the menu. `high_score` comes from the
    /// driver's store.
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            high_score,
            next_bonus_at: BONUS_LIFE_SCORE,
            level_complete_ticks: 0,
            time_ticks: 0,
            seesaw: Seesaw::new(),
            bodies: [Body::new(BodyRole::Primary), Body::new(BodyRole::Alternate)],
            flying: 0,
            waiting: 1,
            grid: TargetGrid::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a fresh run: counters reset, grid rebuilt, seesaw recreated
    /// with the canonical side down, roles back to the primary body flying.
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.next_bonus_at = BONUS_LIFE_SCORE;

        self.seesaw = Seesaw::new();
        self.flying = 0;
        self.waiting = 1;
        self.bodies[0].reset(&mut self.rng);
        self.bodies[1].reset(&mut self.rng);
        self.bodies[1].active = false;

        self.grid.reset();

        log::info!("new game started (seed {})", self.seed);
    }

    /// Advance to the next level. Seesaw, score, and lives carry over.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.grid.reset();
        self.respawn_flying();
        self.bodies[self.waiting].active = false;
        self.phase = GamePhase::Playing;

        log::info!("level {} started", self.level);
    }

    /// Reset the flying body at the spawn point, roles untouched
    pub fn respawn_flying(&mut self) {
        let flying = self.flying;
        self.bodies[flying].reset(&mut self.rng);
    }

    /// Exchange the flying and waiting role indices
    pub fn swap_roles(&mut self) {
        std::mem::swap(&mut self.flying, &mut self.waiting);
    }

    pub fn flying_body(&self) -> &Body {
        &self.bodies[self.flying]
    }

    pub fn waiting_body(&self) -> &Body {
        &self.bodies[self.waiting]
    }

    /// Where the waiting body perches on the seesaw's down side.
    /// Render-facing; the core never integrates the waiting body.
    pub fn waiting_anchor(&self) -> glam::Vec2 {
        let side = self.seesaw.down_side();
        glam::Vec2::new(
            self.seesaw.end_x(side) - BODY_WIDTH / 2.0,
            self.seesaw.end_y(side) - BODY_HEIGHT,
        )
    }

    /// Add points and handle the bonus-life threshold. Grants at most one
    /// life per call even when a single award crosses several thresholds;
    /// the threshold still advances by one step. Long-standing behavior,
    /// kept as-is.
    pub fn add_score(&mut self, points: u64) -> bool {
        self.score += points;
        if self.score >= self.next_bonus_at {
            self.lives += 1;
            self.next_bonus_at += BONUS_LIFE_SCORE;
            log::debug!("bonus life granted at {}", self.score);
            return true;
        }
        false
    }

    /// Finish the run. Returns true when the high score improved and should
    /// be persisted.
    pub fn game_over(&mut self) -> bool {
        self.phase = GamePhase::GameOver;
        let improved = self.score > self.high_score;
        if improved {
            self.high_score = self.score;
        }
        log::info!("game over: score {} level {}", self.score, self.level);
        improved
    }
}
