//! Per-frame timing and the transform pipeline shared by the cube demos.
//!
//! [`FrameClock`] is the render loop's only piece of state: the instant the
//! loop started and the instant of the previous frame. Passing it explicitly
//! keeps the loop free of hidden globals.

use std::time::Instant;

use glam::{Mat4, Vec3};

/// Vertical field of view of the cube demos, in radians.
pub const FIELD_OF_VIEW: f32 = 45.0 * std::f32::consts::PI / 180.0;
/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance.
pub const Z_FAR: f32 = 100.0;
/// How far the cube sits in front of the camera.
pub const VIEW_DISTANCE: f32 = 6.0;
/// The y-axis spins at this fraction of the z-axis rate.
pub const Y_SPIN_RATIO: f32 = 0.7;

/// Transient timing values for one frame, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTiming {
    /// Wall-clock time since the loop started. Drives the rotation, so
    /// playback speed is independent of frame rate.
    pub elapsed: f32,
    /// Time since the previous frame.
    pub delta: f32,
}

/// Tracks the previous frame's timestamp across loop iterations.
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
}

impl FrameClock {
    /// Starts the clock at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
        }
    }

    /// Advances the clock one frame and returns the timing for it.
    pub fn tick(&mut self) -> FrameTiming {
        let now = Instant::now();
        let timing = FrameTiming {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.last_frame = now;
        timing
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective projection for the given drawable aspect ratio.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR)
}

/// Model-view matrix for the tumbling cube after `elapsed` seconds: a fixed
/// translation down the view axis, a z-axis rotation equal to the elapsed
/// time in radians, and a y-axis rotation at [`Y_SPIN_RATIO`] of that rate.
pub fn model_view(elapsed: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -VIEW_DISTANCE))
        * Mat4::from_rotation_z(elapsed)
        * Mat4::from_rotation_y(elapsed * Y_SPIN_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_view_matches_reconstruction() {
        for &t in &[0.0_f32, 1.0, 2.0] {
            let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0))
                * Mat4::from_rotation_z(t)
                * Mat4::from_rotation_y(0.7 * t);
            assert_eq!(model_view(t).to_cols_array(), expected.to_cols_array());
        }
    }

    #[test]
    fn test_model_view_at_zero_is_pure_translation() {
        let m = model_view(0.0);
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0));
        assert_eq!(m.to_cols_array(), expected.to_cols_array());
    }

    #[test]
    fn test_transforms_are_deterministic() {
        // Bit-identical across invocations with the same input.
        assert_eq!(
            model_view(1.5).to_cols_array(),
            model_view(1.5).to_cols_array()
        );
        assert_eq!(
            projection(16.0 / 9.0).to_cols_array(),
            projection(16.0 / 9.0).to_cols_array()
        );
    }

    #[test]
    fn test_projection_uses_the_fixed_frustum() {
        let expected = Mat4::perspective_rh_gl(45.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        assert_eq!(
            projection(4.0 / 3.0).to_cols_array(),
            expected.to_cols_array()
        );
    }

    #[test]
    fn test_clock_ticks_are_monotonic() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first.elapsed >= 0.0);
        assert!(second.elapsed >= first.elapsed);
        assert!(second.delta >= 0.0);
    }
}
