//! Visual-side state types shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs. The native frontend
//! consumes them to build camera matrices, to orient the whole arrangement and
//! to place the aim cursor.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::constants::*;

/// Named visual arrangement. Changes are discrete, never interpolated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Tree,
    Scatter,
    Focus,
}

impl Mode {
    /// Status line reported when a gesture switches into this mode.
    pub fn gesture_status(&self) -> &'static str {
        match self {
            Mode::Tree => "Gesture: Fist (Tree)",
            Mode::Scatter => "Gesture: Open (Scatter)",
            Mode::Focus => "Gesture: Pinch (Gallery)",
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera, looking at the tree from slightly above.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
    /// Keep the projection in step with the surface; zero-height sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pitch (x) / yaw (y) of the whole arrangement, eased toward the hand aim.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub current: Vec2,
    pub target: Vec2,
}

impl RotationState {
    /// Map a normalized aim point to target angles.
    pub fn aim(&mut self, aim: Vec2) {
        self.target.y = (aim.x - 0.5) * AIM_YAW_GAIN;
        self.target.x = (aim.y - 0.5) * AIM_PITCH_GAIN;
    }

    /// One frame of exponential easing toward the target.
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * ROTATION_SMOOTHING;
    }

    /// Orientation of the arrangement at `time_ms`, including the slow idle drift.
    pub fn group_rotation(&self, time_ms: f64) -> Quat {
        let drift = (time_ms * ROTATION_DRIFT_PER_MS as f64) as f32;
        Quat::from_euler(glam::EulerRot::XYZ, self.current.x, self.current.y + drift, 0.0)
    }
}

/// Wireframe aim indicator that follows the hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub position: Vec3,
    pub visible: bool,
    /// Accumulated spin about y (x component) and z (y component).
    pub spin: Vec2,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CURSOR_DEPTH),
            visible: false,
            spin: Vec2::ZERO,
        }
    }
}

impl Cursor {
    /// Show the cursor at the mirrored aim point.
    pub fn show(&mut self, aim: Vec2) {
        self.position = Vec3::new(
            (0.5 - aim.x) * CURSOR_SPAN_X,
            (0.5 - aim.y) * CURSOR_SPAN_Y,
            CURSOR_DEPTH,
        );
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn step(&mut self) {
        self.spin.x += CURSOR_SPIN_PER_FRAME;
        self.spin.y -= CURSOR_SPIN_PER_FRAME;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.spin.x) * Quat::from_rotation_z(self.spin.y)
    }
}
