//! Fixed timestep simulation tick
//!
//! One call per logical frame, driven externally at the nominal tick rate.
//! Data flows one way: input -> seesaw/body update -> collision resolution
//! -> score/life bookkeeping -> phase transition. The audio sink and score
//! store are injected capabilities; they are invoked, never queried for
//! game logic.

use glam::Vec2;

use super::seesaw::Side;
use super::state::{GamePhase, GameState};
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::*;
use crate::highscores::HighScoreStore;

/// Input commands for a single tick (deterministic)
///
/// The driver owns edge-triggering: `action` must be true at most once per
/// physical press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute horizontal steer target (pointer). Takes priority over the
    /// discrete flags when present.
    pub pointer_x: Option<f32>,
    /// Discrete steering
    pub left: bool,
    pub right: bool,
    /// Single-shot start/restart signal
    pub action: bool,
    /// Demo mode: the sim steers itself (headless runs, attract screen)
    pub demo: bool,
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    audio: &mut dyn AudioSink,
    scores: &mut dyn HighScoreStore,
) {
    let input = if input.demo {
        autopilot(state, *input)
    } else {
        *input
    };

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            if input.action {
                state.start_game();
                audio.play(SoundEffect::Start);
            }
        }

        GamePhase::LevelComplete => {
            state.level_complete_ticks = state.level_complete_ticks.saturating_sub(1);
            if state.level_complete_ticks == 0 {
                state.next_level();
            }
        }

        GamePhase::Playing => {
            state.seesaw.update(input.pointer_x, input.left, input.right);

            if state.bodies[state.flying].active {
                state.bodies[state.flying].update();
            }

            state.grid.update();

            check_seesaw_collision(state, audio);

            let points = state.grid.check_collision(&state.bodies[state.flying]);
            if points > 0 {
                state.add_score(points);
                audio.play(SoundEffect::Pop);
            }

            if state.bodies[state.flying].has_fallen() {
                lose_life(state, audio, scores);
            }

            if state.phase == GamePhase::Playing && state.grid.all_popped() {
                state.phase = GamePhase::LevelComplete;
                state.level_complete_ticks = LEVEL_COMPLETE_TICKS;
                audio.play(SoundEffect::LevelComplete);
            }
        }
    }
}

/// The launch/miss protocol between the flying body and the seesaw.
///
/// Checked only while the body is falling and its bottom edge is within one
/// frame's fall distance past the plank top, so a fast body cannot tunnel
/// through. A hit on the raised half launches the waiting body; a hit on
/// the occupied half is a miss and the body keeps falling.
fn check_seesaw_collision(state: &mut GameState, audio: &mut dyn AudioSink) {
    let body = &state.bodies[state.flying];
    if !body.active || body.vel.y <= 0.0 {
        return;
    }

    let bounds = body.bounds();
    let plank_top = state.seesaw.y();
    if bounds.bottom < plank_top || bounds.bottom > plank_top + SEESAW_HEIGHT + body.vel.y {
        return;
    }
    if bounds.right < state.seesaw.x() || bounds.left > state.seesaw.x() + SEESAW_WIDTH {
        return;
    }

    let hit_x = body.center_x();
    if !state.seesaw.is_on_up_side(hit_x, UP_SIDE_MARGIN) {
        // Landed on the occupied half; gravity finishes the job
        return;
    }

    let struck = state.seesaw.side_hit(hit_x);
    let impact_vy = body.vel.y;
    launch(state, struck, hit_x, impact_vy);
    audio.play(SoundEffect::Bounce);
}

/// Transfer the waiting body into flight.
///
/// Launch power is the base velocity plus an edge bonus scaled by where the
/// landing struck the plank and how hard it came down. Horizontal velocity
/// inherits a fraction of the seesaw's steering momentum plus an outward
/// nudge off the down-side end.
fn launch(state: &mut GameState, struck: Side, hit_x: f32, impact_vy: f32) {
    let down = state.seesaw.down_side();
    let impact = (impact_vy / MAX_VELOCITY_Y).clamp(0.0, 1.0);
    let edge = state.seesaw.bounce_multiplier(hit_x);

    let launched = &mut state.bodies[state.waiting];
    launched.pos = Vec2::new(
        state.seesaw.end_x(down) - BODY_WIDTH / 2.0,
        state.seesaw.y() - BODY_HEIGHT,
    );
    launched.vel = Vec2::new(
        state.seesaw.velocity() * MOMENTUM_TRANSFER + down.sign() * LAUNCH_NUDGE,
        LAUNCH_BASE_VY + LAUNCH_EDGE_BONUS * edge * impact,
    );
    launched.active = true;

    // The lander settles onto the plank; the renderer parks it on the new
    // down side via `waiting_anchor`
    let lander = &mut state.bodies[state.flying];
    lander.active = false;
    lander.vel = Vec2::ZERO;

    state.swap_roles();
    state.seesaw.set_tilt(struck);
}

/// A fall below the field costs a life; the last one ends the run and
/// persists an improved high score.
fn lose_life(state: &mut GameState, audio: &mut dyn AudioSink, scores: &mut dyn HighScoreStore) {
    state.lives -= 1;
    audio.play(SoundEffect::Death);
    log::debug!("life lost, {} remaining", state.lives);

    if state.lives <= 0 {
        if state.game_over() {
            scores.save(state.high_score);
        }
        audio.play(SoundEffect::GameOver);
    } else {
        state.respawn_flying();
    }
}

/// Self-steering input for demo/headless runs: keep the seesaw's raised end
/// under the falling body and auto-start from the menu.
fn autopilot(state: &GameState, mut input: TickInput) -> TickInput {
    input.action = matches!(state.phase, GamePhase::Menu | GamePhase::GameOver);

    if state.phase == GamePhase::Playing {
        let body = &state.bodies[state.flying];
        // Offset so the body comes down on the raised half
        let lead = state.seesaw.up_side().sign() * SEESAW_WIDTH / 4.0;
        input.pointer_x = Some((body.center_x() - lead).clamp(0.0, FIELD_WIDTH));
    }

    input
}
