//! Sound effect capability
//!
//! The sim fires sound effects and never waits on them. Backends implement
//! [`AudioSink`]; a missing or muted backend is just [`NullAudio`], so
//! gameplay code never has to care whether audio is available.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Game started from the menu or a game-over screen
    Start,
    /// Valid landing on the seesaw's raised side
    Bounce,
    /// One or more targets popped
    Pop,
    /// The flying body fell off the field
    Death,
    /// Every target cleared
    LevelComplete,
    /// Last life spent
    GameOver,
}

/// Fire-and-forget audio sink. Implementations must not block and must
/// tolerate being called at tick rate.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that swallows everything (headless runs, muted audio)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that logs effects at debug level; useful for the headless binary
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
    }
}
