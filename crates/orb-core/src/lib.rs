pub mod lights;
pub mod shade;

use glam::Vec2;

// ---------------------------------------------------------------------------
// FrameState — the per-frame inputs threaded from the driver to the shader
// ---------------------------------------------------------------------------

/// Everything a frame's shading depends on. Rebuilt by the driver each tick
/// from live queries (surface size, session clock); nothing here outlives a
/// single frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Surface size in pixels.
    pub resolution: Vec2,
    /// Seconds since the session started. Monotonically non-decreasing.
    pub time: f32,
    pub frame: u64,
}

impl FrameState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: Vec2::new(width as f32, height as f32),
            time: 0.0,
            frame: 0,
        }
    }

    /// Update for the next frame: new elapsed time, current surface size.
    pub fn tick(&mut self, elapsed: f32, width: u32, height: u32) {
        self.resolution = Vec2::new(width as f32, height as f32);
        self.time = elapsed;
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_frame_zero() {
        let s = FrameState::new(800, 600);
        assert_eq!(s.frame, 0);
        assert_eq!(s.time, 0.0);
        assert_eq!(s.resolution, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn tick_advances_frame_and_time() {
        let mut s = FrameState::new(800, 600);
        s.tick(0.016, 800, 600);
        s.tick(0.033, 1024, 768);
        assert_eq!(s.frame, 2);
        assert!((s.time - 0.033).abs() < 1e-6);
        assert_eq!(s.resolution, Vec2::new(1024.0, 768.0));
    }
}
