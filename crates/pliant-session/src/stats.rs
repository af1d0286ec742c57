//! Frame-rate monitor.

use pliant_types::Scalar;

/// Accumulated timing over the session's frame loop.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    frames: u64,
    total_elapsed: f64,
    last_elapsed: f64,
}

impl FrameStats {
    /// Creates an empty monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame's elapsed wall time (seconds).
    pub fn record(&mut self, elapsed: Scalar) {
        self.frames += 1;
        self.total_elapsed += elapsed as f64;
        self.last_elapsed = elapsed as f64;
    }

    /// Returns the number of recorded frames.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Instantaneous rate of the last frame (Hz), or 0 before any frame.
    pub fn last_rate(&self) -> f64 {
        if self.last_elapsed > 0.0 {
            1.0 / self.last_elapsed
        } else {
            0.0
        }
    }

    /// Average rate over the whole session (Hz), or 0 before any frame.
    pub fn average_rate(&self) -> f64 {
        if self.total_elapsed > 0.0 {
            self.frames as f64 / self.total_elapsed
        } else {
            0.0
        }
    }
}
