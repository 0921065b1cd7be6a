use glam::Vec3;

// Shared layout/animation/gesture tuning constants used by the core and frontends.

// Population
pub const DESKTOP_DECORATION_COUNT: usize = 1500;
pub const CONSTRAINED_DECORATION_COUNT: usize = 800;
pub const DEFAULT_PHOTO_CAPACITY: usize = 20;

// Tree mode: decoration helix
pub const TREE_DECORATION_RADIUS: f32 = 12.0;
pub const TREE_DECORATION_HEIGHT: f32 = 28.0; // spans [-14, 14]
pub const TREE_DECORATION_TURNS: f32 = 40.0; // radians over the full ratio, not wrapped
pub const TREE_DECORATION_SCALE: f32 = 1.0;

// Tree mode: photo helix
pub const TREE_PHOTO_RADIUS: f32 = 14.0;
pub const TREE_PHOTO_TAPER: f32 = 0.8;
pub const TREE_PHOTO_HEIGHT: f32 = 30.0; // spans [-15, 15]
pub const TREE_PHOTO_TURNS: f32 = std::f32::consts::PI * 10.0;
pub const TREE_PHOTO_SCALE: f32 = 0.5;

// Scatter mode
pub const SCATTER_HALF_EXTENTS: [f32; 3] = [40.0, 25.0, 30.0];
pub const SCATTER_DECORATION_SCALE: f32 = 1.2;
pub const SCATTER_PHOTO_SCALE: f32 = 1.0;

// Focus ("gallery") mode
pub const FOCUS_ARC_SPAN: f32 = std::f32::consts::PI * 0.7;
pub const FOCUS_ARC_RADIUS: f32 = 30.0;
pub const FOCUS_ARC_Z_OFFSET: f32 = -15.0; // pulls the arc centre behind the origin
pub const FOCUS_PHOTO_HEIGHT: f32 = 2.0;
pub const FOCUS_PHOTO_SCALE: f32 = 1.4;
pub const FOCUS_LOOK_AT: [f32; 3] = [0.0, 2.0, 50.0];
pub const FOCUS_RING_RADIUS_MIN: f32 = 50.0;
pub const FOCUS_RING_RADIUS_SPAN: f32 = 20.0;
pub const FOCUS_RING_HALF_HEIGHT: f32 = 20.0;
pub const FOCUS_DECORATION_SCALE: f32 = 0.4;

// Animation stepper (per-frame factors, time in milliseconds)
pub const DECORATION_SMOOTHING: f32 = 0.04;
pub const PHOTO_SMOOTHING: f32 = 0.08;
pub const BOB_AMPLITUDE: f32 = 0.05;
pub const BOB_FREQUENCY: f32 = 0.001;
pub const PHASE_OFFSET_RANGE: f32 = 100.0;
pub const DECORATION_SPIN_PER_FRAME: f32 = 0.01;

// Group rotation
pub const ROTATION_SMOOTHING: f32 = 0.05;
pub const ROTATION_DRIFT_PER_MS: f32 = 0.0002;
pub const AIM_YAW_GAIN: f32 = 3.0;
pub const AIM_PITCH_GAIN: f32 = 2.5;

// Cursor indicator
pub const CURSOR_SPAN_X: f32 = 40.0;
pub const CURSOR_SPAN_Y: f32 = 30.0;
pub const CURSOR_DEPTH: f32 = 15.0;
pub const CURSOR_SPIN_PER_FRAME: f32 = 0.05;

// Gesture thresholds (normalized image-space distances)
pub const PINCH_THRESHOLD: f32 = 0.05;
pub const FIST_THRESHOLD: f32 = 0.25;
pub const OPEN_THRESHOLD: f32 = 0.60;

// Scene camera
pub const CAMERA_FOVY_DEGREES: f32 = 40.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 5.0, 55.0];
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Palette (linear-ish RGB used by the renderer)
pub const GOLD_RGB: [f32; 3] = [0.898, 0.753, 0.400]; // #e5c066
pub const EMERALD_RGB: [f32; 3] = [0.024, 0.157, 0.106]; // #06281b
pub const RUBY_RGB: [f32; 3] = [0.478, 0.0, 0.0]; // #7a0000

// Status text
pub const STATUS_INITIALIZING: &str = "Initializing Systems...";
pub const STATUS_READY: &str = "System Ready: Show Hand";
pub const STATUS_GESTURE_UNAVAILABLE: &str = "Gesture Unavailable";
pub const STATUS_PHOTOS_ADDED: &str = "Photos Added to Gallery";

#[inline]
pub fn focus_look_at_vec3() -> Vec3 {
    Vec3::from(FOCUS_LOOK_AT)
}

#[inline]
pub fn scatter_half_extents_vec3() -> Vec3 {
    Vec3::from(SCATTER_HALF_EXTENTS)
}
