//! Value types and tuning constants shared by every orrery crate.
//!
//! The input layer, the animation core and the terminal front end exchange
//! only these plain-data types; the crate has no dependencies.
//!
//! # Frame Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Target frame interval (~30 FPS) |
//! | `FPS_WINDOW_MS` | 500 | Window over which the FPS readout is averaged |
//!
//! # Camera Input Steps
//!
//! Each key press nudges the [`CameraOffset`] by a fixed step:
//!
//! - `PAN_STEP`: 0.5 world units per press (x/y)
//! - `ZOOM_STEP`: 1.0 world unit per press
//! - `YAW_STEP`: 0.1 radians per press
//!
//! # Examples
//!
//! ```
//! use tui_orrery_types::{CameraOffset, DemoAction, PAN_STEP};
//!
//! let mut offset = CameraOffset::default();
//! offset.apply(DemoAction::PanUp);
//! assert_eq!(offset.y, PAN_STEP);
//!
//! offset.reset();
//! assert!(offset.is_zero());
//! ```

/// Target frame interval in milliseconds (33ms ≈ 30 FPS)
pub const FRAME_MS: u32 = 33;

/// Averaging window for the on-screen FPS counter.
pub const FPS_WINDOW_MS: u32 = 500;

/// Pan distance per key press (world units).
pub const PAN_STEP: f32 = 0.5;

/// Zoom distance per key press (world units).
pub const ZOOM_STEP: f32 = 1.0;

/// Yaw change per key press (radians).
pub const YAW_STEP: f32 = 0.1;

/// The camera never gets closer than this to its look-at target.
pub const MIN_CAMERA_DISTANCE: f32 = 1.5;

/// Vertical field of view (radians).
pub const CAMERA_FOV_Y: f32 = 0.9;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const CAMERA_FAR: f32 = 400.0;

/// Maximum number of lights a scene may carry.
pub const MAX_LIGHTS: usize = 8;

/// Linear supersampling factor when supersampling is on (2 => 2x2 samples per pixel).
pub const SUPERSAMPLE_FACTOR: u16 = 2;

/// Number of selectable scenes (keys `1`..=`3`).
pub const SCENE_COUNT: usize = 3;


/// Accumulated user camera adjustment layered on top of the automatic orbit.
///
/// - **x/y**: pan offsets applied to both the eye and the look-at target
/// - **z**: zoom, subtracted from the orbit radius
/// - **yaw**: added to the orbit angle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOffset {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
}

impl CameraOffset {
    /// The zero offset.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        yaw: 0.0,
    };

    /// Apply one camera action. Non-camera actions are ignored.
    ///
    /// Returns `true` if the offset was touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_orrery_types::{CameraOffset, DemoAction, YAW_STEP};
    ///
    /// let mut offset = CameraOffset::default();
    /// assert!(offset.apply(DemoAction::YawLeft));
    /// assert_eq!(offset.yaw, YAW_STEP);
    /// assert!(!offset.apply(DemoAction::ToggleSupersampling));
    /// ```
    pub fn apply(&mut self, action: DemoAction) -> bool {
        match action {
            DemoAction::PanUp => self.y += PAN_STEP,
            DemoAction::PanDown => self.y -= PAN_STEP,
            DemoAction::PanLeft => self.x -= PAN_STEP,
            DemoAction::PanRight => self.x += PAN_STEP,
            DemoAction::YawLeft => self.yaw += YAW_STEP,
            DemoAction::YawRight => self.yaw -= YAW_STEP,
            DemoAction::ZoomIn => self.z += ZOOM_STEP,
            DemoAction::ZoomOut => self.z -= ZOOM_STEP,
            DemoAction::ResetCamera => self.reset(),
            DemoAction::SwitchScene(_) | DemoAction::ToggleSupersampling => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Everything a key press can ask the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    /// Rotate the orbit angle forward (`q`).
    YawLeft,
    /// Rotate the orbit angle backward (`e`).
    YawRight,
    ZoomIn,
    ZoomOut,
    ResetCamera,
    /// Activate the scene at this zero-based index.
    SwitchScene(usize),
    ToggleSupersampling,
}

#[cfg(test)]
mod offset_tests {
    use super::*;

    #[test]
    fn opposite_pans_cancel() {
        let mut o = CameraOffset::default();
        o.apply(DemoAction::PanLeft);
        o.apply(DemoAction::PanRight);
        o.apply(DemoAction::PanUp);
        o.apply(DemoAction::PanDown);
        assert_eq!(o.x, 0.0);
        assert_eq!(o.y, 0.0);
    }

    #[test]
    fn zoom_and_yaw_accumulate() {
        let mut o = CameraOffset::default();
        for _ in 0..3 {
            o.apply(DemoAction::ZoomIn);
            o.apply(DemoAction::YawRight);
        }
        assert_eq!(o.z, 3.0 * ZOOM_STEP);
        assert!((o.yaw + 3.0 * YAW_STEP).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut o = CameraOffset {
            x: 3.0,
            y: -2.0,
            z: 7.5,
            yaw: 1.2,
        };
        assert!(o.apply(DemoAction::ResetCamera));
        assert!(o.is_zero());
    }

    #[test]
    fn scene_switch_does_not_touch_offset() {
        let mut o = CameraOffset {
            x: 1.0,
            ..CameraOffset::ZERO
        };
        assert!(!o.apply(DemoAction::SwitchScene(2)));
        assert_eq!(o.x, 1.0);
    }
}
