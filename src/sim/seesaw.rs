//! The player-steered seesaw
//!
//! A rigid plank on a fixed fulcrum. Exactly one side is down at all times;
//! the tilt flips only through [`Seesaw::set_tilt`] after a launch. The
//! frame-to-frame horizontal delta is tracked so a launch can inherit the
//! player's steering momentum.

use crate::consts::*;

/// One half of the plank. Also doubles as a tilt value: the stored side is
/// the one currently touching down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// -1.0 for left, +1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Seesaw {
    /// Left edge of the plank
    x: f32,
    /// Down side
    tilt: Side,
    /// Horizontal delta of the last update, for momentum transfer
    vx: f32,
}

impl Default for Seesaw {
    fn default() -> Self {
        Self::new()
    }
}

impl Seesaw {
    /// Fresh seesaw, centered, left side down
    pub fn new() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0 - SEESAW_WIDTH / 2.0,
            tilt: Side::Left,
            vx: 0.0,
        }
    }

    /// Steer for one tick. A pointer position (absolute, field coordinates)
    /// takes priority over the discrete direction flags.
    pub fn update(&mut self, pointer_x: Option<f32>, left: bool, right: bool) {
        let prev_x = self.x;

        if let Some(px) = pointer_x {
            self.x = px - SEESAW_WIDTH / 2.0;
        } else {
            if left {
                self.x -= SEESAW_SPEED;
            }
            if right {
                self.x += SEESAW_SPEED;
            }
        }

        self.x = self.x.clamp(0.0, FIELD_WIDTH - SEESAW_WIDTH);
        self.vx = self.x - prev_x;
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        SEESAW_Y
    }

    pub fn center_x(&self) -> f32 {
        self.x + SEESAW_WIDTH / 2.0
    }

    /// Left endpoint, inset from the plank edge
    pub fn left_x(&self) -> f32 {
        self.x + SEESAW_END_INSET
    }

    /// Right endpoint, inset from the plank edge
    pub fn right_x(&self) -> f32 {
        self.x + SEESAW_WIDTH - SEESAW_END_INSET
    }

    /// Endpoint for a given side
    pub fn end_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_x(),
            Side::Right => self.right_x(),
        }
    }

    /// Plank surface height at an endpoint, accounting for tilt. Render-facing.
    pub fn end_y(&self, side: Side) -> f32 {
        let tilt_offset =
            self.tilt.sign() * side.sign() * SEESAW_TILT_ANGLE.sin() * (SEESAW_WIDTH / 2.0);
        // y grows downward, so the down side sits below the pivot height
        SEESAW_Y + tilt_offset
    }

    /// Launch power bias: 0 at the plank center, approaching 1 at either edge
    pub fn bounce_multiplier(&self, x: f32) -> f32 {
        let offset = (x - self.center_x()).abs();
        (offset / (SEESAW_WIDTH / 2.0)).min(1.0)
    }

    /// Which half a horizontal position strikes
    pub fn side_hit(&self, x: f32) -> Side {
        if x < self.center_x() {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn up_side(&self) -> Side {
        self.tilt.opposite()
    }

    pub fn down_side(&self) -> Side {
        self.tilt
    }

    /// Whether a landing at `x` counts as hitting the raised half. `margin`
    /// widens the valid half past the center so grazing hits still launch.
    pub fn is_on_up_side(&self, x: f32, margin: f32) -> bool {
        let center = self.center_x();
        match self.up_side() {
            Side::Left => x < center + margin,
            Side::Right => x > center - margin,
        }
    }

    /// Force a side down (after every launch)
    pub fn set_tilt(&mut self, side: Side) {
        self.tilt = side;
    }

    /// Horizontal delta of the last update
    pub fn velocity(&self) -> f32 {
        self.vx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_centered_left_down() {
        let seesaw = Seesaw::new();
        assert_eq!(seesaw.center_x(), FIELD_WIDTH / 2.0);
        assert_eq!(seesaw.down_side(), Side::Left);
        assert_eq!(seesaw.up_side(), Side::Right);
    }

    #[test]
    fn pointer_takes_priority_over_keys() {
        let mut seesaw = Seesaw::new();
        seesaw.update(Some(100.0), false, true);
        assert_eq!(seesaw.center_x(), 100.0);
    }

    #[test]
    fn keys_move_at_fixed_speed() {
        let mut seesaw = Seesaw::new();
        let x0 = seesaw.x();
        seesaw.update(None, false, true);
        assert_eq!(seesaw.x(), x0 + SEESAW_SPEED);
        assert_eq!(seesaw.velocity(), SEESAW_SPEED);
        seesaw.update(None, true, false);
        assert_eq!(seesaw.x(), x0);
        assert_eq!(seesaw.velocity(), -SEESAW_SPEED);
    }

    #[test]
    fn clamped_to_field() {
        let mut seesaw = Seesaw::new();
        seesaw.update(Some(-500.0), false, false);
        assert_eq!(seesaw.x(), 0.0);
        seesaw.update(Some(FIELD_WIDTH + 500.0), false, false);
        assert_eq!(seesaw.x(), FIELD_WIDTH - SEESAW_WIDTH);
    }

    #[test]
    fn bounce_multiplier_zero_at_center_one_at_edges() {
        let seesaw = Seesaw::new();
        assert_eq!(seesaw.bounce_multiplier(seesaw.center_x()), 0.0);
        let at_left = seesaw.bounce_multiplier(seesaw.x());
        let at_right = seesaw.bounce_multiplier(seesaw.x() + SEESAW_WIDTH);
        assert!((at_left - 1.0).abs() < 1e-6);
        assert!((at_right - 1.0).abs() < 1e-6);
    }

    #[test]
    fn side_hit_splits_at_center() {
        let seesaw = Seesaw::new();
        assert_eq!(seesaw.side_hit(seesaw.center_x() - 1.0), Side::Left);
        assert_eq!(seesaw.side_hit(seesaw.center_x() + 1.0), Side::Right);
    }

    #[test]
    fn up_side_gate_honors_margin() {
        let seesaw = Seesaw::new(); // left down, right up
        let center = seesaw.center_x();
        assert!(seesaw.is_on_up_side(center + 1.0, UP_SIDE_MARGIN));
        // Slightly left of center still counts thanks to the margin
        assert!(seesaw.is_on_up_side(center - UP_SIDE_MARGIN + 1.0, UP_SIDE_MARGIN));
        assert!(!seesaw.is_on_up_side(center - UP_SIDE_MARGIN - 1.0, UP_SIDE_MARGIN));
    }

    #[test]
    fn set_tilt_flips_sides() {
        let mut seesaw = Seesaw::new();
        seesaw.set_tilt(Side::Right);
        assert_eq!(seesaw.down_side(), Side::Right);
        assert_eq!(seesaw.up_side(), Side::Left);
    }

    #[test]
    fn end_y_raises_the_up_side() {
        let seesaw = Seesaw::new(); // left down
        assert!(seesaw.end_y(Side::Right) < SEESAW_Y);
        assert!(seesaw.end_y(Side::Left) > SEESAW_Y);
    }

    proptest! {
        #[test]
        fn bounce_multiplier_in_unit_range(x in 0.0f32..FIELD_WIDTH) {
            let seesaw = Seesaw::new();
            let m = seesaw.bounce_multiplier(x);
            prop_assert!((0.0..=1.0).contains(&m));
        }

        #[test]
        fn bounce_multiplier_monotonic_from_center(
            a in 0.0f32..20.0,
            b in 0.0f32..20.0,
        ) {
            let seesaw = Seesaw::new();
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let center = seesaw.center_x();
            prop_assert!(
                seesaw.bounce_multiplier(center + near)
                    <= seesaw.bounce_multiplier(center + far)
            );
        }
    }
}
