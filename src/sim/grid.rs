//! The target grid and its pop effects
//!
//! A fixed 3x10 grid of poppable targets. Row index 0 is the bottom row and
//! scores the least; point values are a pure function of the row. Pop
//! effects are cosmetic bookkeeping only and never feed back into scoring
//! or collision.

use glam::Vec2;

use super::body::{Body, Bounds};
use crate::consts::*;

/// A single poppable target
#[derive(Debug, Clone)]
pub struct Target {
    /// Center position
    pub pos: Vec2,
    /// Row index, 0 = bottom
    pub row: usize,
    pub active: bool,
}

impl Target {
    /// Point value, determined solely by row
    pub fn points(&self) -> u64 {
        TARGET_POINTS[self.row]
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.pos.x - TARGET_WIDTH / 2.0,
            right: self.pos.x + TARGET_WIDTH / 2.0,
            top: self.pos.y - TARGET_HEIGHT / 2.0,
            bottom: self.pos.y + TARGET_HEIGHT / 2.0,
        }
    }
}

/// Short-lived visual burst left behind by a popped target
#[derive(Debug, Clone)]
pub struct PopEffect {
    pub pos: Vec2,
    /// Row of the popped target (render color lookup)
    pub row: usize,
    pub frame: u32,
    pub max_frames: u32,
}

/// The full grid plus transient pop effects
#[derive(Debug, Clone, Default)]
pub struct TargetGrid {
    pub targets: Vec<Target>,
    pub pop_effects: Vec<PopEffect>,
}

impl TargetGrid {
    pub fn new() -> Self {
        let mut grid = Self::default();
        grid.reset();
        grid
    }

    /// Rebuild the full grid and clear pop effects. Called at game start and
    /// on every level transition.
    pub fn reset(&mut self) {
        self.targets.clear();
        self.pop_effects.clear();

        let total_width = TARGETS_PER_ROW as f32 * TARGET_SPACING_X;
        let start_x = (FIELD_WIDTH - total_width) / 2.0 + TARGET_SPACING_X / 2.0;

        for row in 0..TARGET_ROWS {
            for col in 0..TARGETS_PER_ROW {
                self.targets.push(Target {
                    pos: Vec2::new(
                        start_x + col as f32 * TARGET_SPACING_X,
                        TARGET_START_Y + (TARGET_ROWS - 1 - row) as f32 * TARGET_SPACING_Y,
                    ),
                    row,
                    active: true,
                });
            }
        }
    }

    /// Pop every active target the body overlaps and return the points
    /// scored. Both boxes shrink a little so the hit shape reads rounder
    /// than the sprites. A large body can pop several targets in one call.
    pub fn check_collision(&mut self, body: &Body) -> u64 {
        let body_bounds = body.bounds().shrink(TARGET_HIT_MARGIN);
        let mut total = 0;

        for target in self.targets.iter_mut().filter(|t| t.active) {
            if body_bounds.overlaps(&target.bounds().shrink(TARGET_HIT_MARGIN)) {
                target.active = false;
                total += target.points();
                self.pop_effects.push(PopEffect {
                    pos: target.pos,
                    row: target.row,
                    frame: 0,
                    max_frames: POP_EFFECT_FRAMES,
                });
            }
        }

        total
    }

    /// True iff no target is left standing
    pub fn all_popped(&self) -> bool {
        self.targets.iter().all(|t| !t.active)
    }

    /// Number of targets still active
    pub fn remaining(&self) -> usize {
        self.targets.iter().filter(|t| t.active).count()
    }

    /// Advance pop effects one frame and drop the expired ones. Cosmetic
    /// only.
    pub fn update(&mut self) {
        self.pop_effects.retain_mut(|effect| {
            effect.frame += 1;
            effect.frame < effect.max_frames
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyRole;

    fn body_at(target: &Target) -> Body {
        let mut body = Body::new(BodyRole::Primary);
        body.pos = Vec2::new(
            target.pos.x - BODY_WIDTH / 2.0,
            target.pos.y - BODY_HEIGHT / 2.0,
        );
        body
    }

    #[test]
    fn reset_builds_full_grid() {
        let grid = TargetGrid::new();
        assert_eq!(grid.targets.len(), TARGET_ROWS * TARGETS_PER_ROW);
        assert_eq!(grid.remaining(), 30);
        assert!(!grid.all_popped());
        assert!(grid.pop_effects.is_empty());
    }

    #[test]
    fn grid_is_centered() {
        let grid = TargetGrid::new();
        let first = grid.targets[0].pos.x;
        let last = grid.targets[TARGETS_PER_ROW - 1].pos.x;
        assert!(((first + last) / 2.0 - FIELD_WIDTH / 2.0).abs() < 1e-4);
    }

    #[test]
    fn bottom_row_sits_lowest_and_scores_least() {
        let grid = TargetGrid::new();
        let bottom = grid.targets.iter().find(|t| t.row == 0).unwrap();
        let top = grid.targets.iter().find(|t| t.row == TARGET_ROWS - 1).unwrap();
        assert!(bottom.pos.y > top.pos.y);
        assert_eq!(bottom.points(), TARGET_POINTS[0]);
        assert_eq!(top.points(), TARGET_POINTS[TARGET_ROWS - 1]);
    }

    #[test]
    fn popping_scores_row_value_exactly_once() {
        let mut grid = TargetGrid::new();
        let target = grid.targets[5].clone();
        let body = body_at(&target);

        let points = grid.check_collision(&body);
        assert_eq!(points, target.points());
        assert!(!grid.targets[5].active);
        assert_eq!(grid.pop_effects.len(), 1);

        // Same overlap again scores nothing; popped targets never reactivate
        let points = grid.check_collision(&body);
        assert_eq!(points, 0);
        assert_eq!(grid.pop_effects.len(), 1);
    }

    #[test]
    fn a_miss_scores_nothing() {
        let mut grid = TargetGrid::new();
        let mut body = Body::new(BodyRole::Primary);
        body.pos = Vec2::new(0.0, FIELD_HEIGHT - 50.0);
        assert_eq!(grid.check_collision(&body), 0);
        assert_eq!(grid.remaining(), 30);
    }

    #[test]
    fn hit_margin_shrinks_the_boxes() {
        let mut grid = TargetGrid::new();
        let target = grid.targets[0].clone();
        // Body box touching only the shaved-off corner strip must miss
        let mut body = Body::new(BodyRole::Primary);
        body.pos = Vec2::new(
            target.pos.x + TARGET_WIDTH / 2.0 - TARGET_HIT_MARGIN,
            target.pos.y + TARGET_HEIGHT / 2.0 - TARGET_HIT_MARGIN,
        );
        assert_eq!(grid.check_collision(&body), 0);
    }

    #[test]
    fn all_popped_after_clearing_every_target() {
        let mut grid = TargetGrid::new();
        for target in grid.targets.iter_mut() {
            target.active = false;
        }
        assert!(grid.all_popped());
        assert_eq!(grid.remaining(), 0);
    }

    #[test]
    fn pop_effects_expire_after_max_frames() {
        let mut grid = TargetGrid::new();
        let target = grid.targets[0].clone();
        grid.check_collision(&body_at(&target));
        assert_eq!(grid.pop_effects.len(), 1);

        for _ in 0..POP_EFFECT_FRAMES {
            grid.update();
        }
        assert!(grid.pop_effects.is_empty());
        // Expiry never resurrects targets
        assert!(!grid.targets[0].active);
    }
}
