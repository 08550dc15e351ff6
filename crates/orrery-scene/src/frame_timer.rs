//! Rolling frame-rate average.

use std::collections::VecDeque;

/// Frames kept in the rolling window.
pub const FPS_WINDOW: usize = 60;

/// Averages frame rate over the last [`FPS_WINDOW`] frame times.
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    frame_times: VecDeque<f32>,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `dt` seconds. Non-finite or negative
    /// durations are ignored.
    pub fn tick(&mut self, dt: f32) {
        if !(dt.is_finite() && dt >= 0.0) {
            return;
        }
        self.frame_times.push_back(dt);
        if self.frame_times.len() > FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frames += 1;
    }

    /// Frames per second over the window, or `None` before any time has passed.
    pub fn average_fps(&self) -> Option<f32> {
        let total = self.window_seconds();
        (total > 0.0).then(|| self.frame_times.len() as f32 / total)
    }

    /// Frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Seconds covered by the current window.
    pub fn window_seconds(&self) -> f32 {
        self.frame_times.iter().sum()
    }
}
