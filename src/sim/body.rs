//! The gravity-driven performer body
//!
//! Two of these exist for the whole session; exactly one is "flying"
//! (integrated each tick) while the other waits on the seesaw. Identity is
//! stable: bodies are reset and re-roled, never recreated.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which of the two performers this is. Cosmetic only (render color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Primary,
    Alternate,
}

/// Axis-aligned bounding box edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Shrink all four edges inward by `margin`
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            left: self.left + margin,
            right: self.right - margin,
            top: self.top + margin,
            bottom: self.bottom - margin,
        }
    }

    /// AABB overlap test
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// A gravity-driven point mass with a fixed-size bounding box
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Participates in physics and collision this tick
    pub active: bool,
    pub role: BodyRole,
}

impl Body {
    pub fn new(role: BodyRole) -> Self {
        Self {
            pos: Vec2::new(BODY_START_X - BODY_WIDTH / 2.0, BODY_START_Y),
            vel: Vec2::ZERO,
            active: true,
            role,
        }
    }

    /// Put the body back at the spawn point with a small horizontal jitter
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(BODY_START_X - BODY_WIDTH / 2.0, BODY_START_Y);
        self.vel = Vec2::new((rng.random::<f32>() - 0.5) * 2.0, 0.0);
        self.active = true;
    }

    /// One fixed-timestep integration step
    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.vel.y += GRAVITY;

        self.vel.x = self.vel.x.clamp(-MAX_VELOCITY_X, MAX_VELOCITY_X);
        self.vel.y = self.vel.y.clamp(-MAX_VELOCITY_Y, MAX_VELOCITY_Y);

        self.pos += self.vel;

        // Side walls reflect with damping
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x * WALL_DAMPING;
        }
        if self.pos.x + BODY_WIDTH > FIELD_WIDTH {
            self.pos.x = FIELD_WIDTH - BODY_WIDTH;
            self.vel.x = -self.vel.x * WALL_DAMPING;
        }

        // Ceiling reflects with heavier damping; the bottom edge is open
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y * CEILING_DAMPING;
        }
    }

    /// True once the body has dropped below the field. The only way to lose
    /// a life.
    pub fn has_fallen(&self) -> bool {
        self.pos.y > FIELD_HEIGHT
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + BODY_WIDTH / 2.0
    }

    /// Bounding box edges. Pure query.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.pos.x,
            right: self.pos.x + BODY_WIDTH,
            top: self.pos.y,
            bottom: self.pos.y + BODY_HEIGHT,
        }
    }
}
