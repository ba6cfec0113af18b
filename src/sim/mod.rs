//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod grid;
pub mod seesaw;
pub mod state;
pub mod tick;

pub use body::{Body, BodyRole, Bounds};
pub use grid::{PopEffect, Target, TargetGrid};
pub use seesaw::{Seesaw, Side};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
