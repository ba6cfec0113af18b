//! Teeter Pop headless driver
//!
//! Runs the simulation with the demo autopilot for a fixed number of ticks
//! and reports the run. Handy for soak-testing the sim without a renderer:
//!
//! ```text
//! teeter-pop [seed] [ticks]
//! ```

use teeter_pop::audio::LogAudio;
use teeter_pop::highscores::{FileHighScores, HighScoreStore};
use teeter_pop::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    let mut scores = FileHighScores::new("highscore.json");
    let high_score = scores.load();
    let mut state = GameState::new(seed, high_score);
    let mut audio = LogAudio;

    log::info!("running {ticks} ticks with seed {seed} (high score {high_score})");

    let input = TickInput {
        demo: true,
        ..Default::default()
    };
    let mut best_level = 1;
    for _ in 0..ticks {
        tick(&mut state, &input, &mut audio, &mut scores);
        best_level = best_level.max(state.level);
    }

    log::info!(
        "done: phase {:?}, score {}, lives {}, level {} (best {}), high score {}",
        state.phase,
        state.score,
        state.lives,
        state.level,
        best_level,
        state.high_score,
    );

    if state.phase == GamePhase::Playing {
        log::info!(
            "flying body at ({:.1}, {:.1}), {} targets left",
            state.flying_body().pos.x,
            state.flying_body().pos.y,
            state.grid.remaining(),
        );
    }
}
