//! Teeter Pop - a seesaw-and-targets arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `audio`: Fire-and-forget sound effect capability
//! - `highscores`: Pluggable high-score persistence
//!
//! Rendering and real input backends live outside this crate; a driver feeds
//! one [`sim::TickInput`] per frame and draws from the [`sim::GameState`].

pub mod audio;
pub mod highscores;
pub mod sim;

pub use audio::{AudioSink, NullAudio, SoundEffect};
pub use highscores::HighScoreStore;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate the driver is expected to run at (Hz)
    pub const TICK_RATE: u32 = 60;

    /// Play field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 320.0;
    pub const FIELD_HEIGHT: f32 = 240.0;

    /// Gravity applied to the flying body each tick
    pub const GRAVITY: f32 = 0.15;
    /// Symmetric velocity clamps
    pub const MAX_VELOCITY_X: f32 = 4.0;
    pub const MAX_VELOCITY_Y: f32 = 12.0;
    /// Damping applied when reflecting off the side walls
    pub const WALL_DAMPING: f32 = 0.8;
    /// Damping applied when reflecting off the ceiling
    pub const CEILING_DAMPING: f32 = 0.5;

    /// Body (performer) dimensions and spawn point
    pub const BODY_WIDTH: f32 = 12.0;
    pub const BODY_HEIGHT: f32 = 16.0;
    pub const BODY_START_X: f32 = FIELD_WIDTH / 2.0;
    pub const BODY_START_Y: f32 = 50.0;

    /// Seesaw geometry and steering speed
    pub const SEESAW_WIDTH: f32 = 40.0;
    pub const SEESAW_HEIGHT: f32 = 8.0;
    pub const SEESAW_Y: f32 = FIELD_HEIGHT - 30.0;
    pub const SEESAW_SPEED: f32 = 4.0;
    /// Visual plank tilt in radians
    pub const SEESAW_TILT_ANGLE: f32 = 0.2;
    /// Endpoints sit this far inward from the plank edges
    pub const SEESAW_END_INSET: f32 = 8.0;
    /// Slack around the plank center when gating an up-side landing
    pub const UP_SIDE_MARGIN: f32 = 8.0;

    /// Base upward launch velocity (negative = up)
    pub const LAUNCH_BASE_VY: f32 = -8.0;
    /// Extra launch velocity for edge hits at full impact speed
    pub const LAUNCH_EDGE_BONUS: f32 = -3.0;
    /// Fraction of the seesaw's frame delta passed to the launched body
    pub const MOMENTUM_TRANSFER: f32 = 0.5;
    /// Small outward push in the down side's direction at launch
    pub const LAUNCH_NUDGE: f32 = 0.5;

    /// Target grid layout
    pub const TARGET_ROWS: usize = 3;
    pub const TARGETS_PER_ROW: usize = 10;
    pub const TARGET_WIDTH: f32 = 24.0;
    pub const TARGET_HEIGHT: f32 = 16.0;
    pub const TARGET_START_Y: f32 = 20.0;
    pub const TARGET_SPACING_X: f32 = 30.0;
    pub const TARGET_SPACING_Y: f32 = 20.0;
    /// Points per row, bottom row first
    pub const TARGET_POINTS: [u64; TARGET_ROWS] = [10, 20, 30];
    /// Both hit boxes shrink by this much to fake a rounder shape
    pub const TARGET_HIT_MARGIN: f32 = 2.0;
    /// Pop-effect lifetime in ticks
    pub const POP_EFFECT_FRAMES: u32 = 10;

    /// Session bookkeeping
    pub const STARTING_LIVES: i32 = 3;
    pub const BONUS_LIFE_SCORE: u64 = 5000;
    /// LevelComplete countdown (2 seconds at the nominal tick rate)
    pub const LEVEL_COMPLETE_TICKS: u32 = 2 * TICK_RATE;
}
