use crate::types::FPS_WINDOW_MS;

/// Frames-per-second estimate over fixed windows of wall time.
///
/// The rate is recomputed once per window, which keeps the status line from
/// flickering every frame.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_ms: u64,
    window_start_ms: u64,
    frames: u32,
    fps: Option<f32>,
    started: bool,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(u64::from(FPS_WINDOW_MS))
    }
}

impl FpsCounter {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            window_start_ms: 0,
            frames: 0,
            fps: None,
            started: false,
        }
    }

    /// Count one presented frame at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.started {
            self.started = true;
            self.window_start_ms = now_ms;
            self.frames = 0;
            return;
        }

        self.frames += 1;
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed >= self.window_ms {
            self.fps = Some(self.frames as f32 * 1000.0 / elapsed as f32);
            self.window_start_ms = now_ms;
            self.frames = 0;
        }
    }

    /// Last completed estimate; `None` until the first window closes.
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.window_ms);
    }
}
