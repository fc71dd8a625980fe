//! Monotonic scene clock.

use std::time::Instant;

/// Elapsed-seconds source driving body self-rotation and the shader time
/// input.
///
/// Wall-clock based and strictly non-decreasing within a session. The frame
/// update takes the sampled value as a parameter, so tests and the headless
/// demo can drive virtual time without touching a real clock.
#[derive(Clone, Debug)]
pub struct SceneClock {
    started: Instant,
}

impl SceneClock {
    /// Start the clock; `elapsed()` is 0 here.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}
