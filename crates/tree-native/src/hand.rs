//! Simulated hand-landmark detector driven by the mouse and keyboard.
//!
//! The mouse position plays the palm; held keys pick the hand pose:
//!
//! * `F` fist, `O` open palm, `P` pinch (none held: relaxed, inside the dead band)
//! * `H` toggles whether a hand is in view
//!
//! A virtual camera produces a new frame every [`CAMERA_FRAME_MS`], so faster
//! render ticks see repeated frame times exactly as with a real webcam.

use glam::Vec2;
use tree_core::{accept_hand, landmark, DetectorFrame, HandDetector, Landmark};

pub const CAMERA_FRAME_MS: f64 = 1000.0 / 30.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pose {
    #[default]
    Relaxed,
    Fist,
    Open,
    Pinch,
}

impl Pose {
    /// Index-tip to wrist distance for the pose.
    fn openness(&self) -> f32 {
        match self {
            Pose::Fist => 0.15,
            Pose::Open => 0.70,
            Pose::Relaxed | Pose::Pinch => 0.40,
        }
    }
}

pub struct SimulatedHand {
    /// Mouse position over the window in 0..1.
    pointer: Vec2,
    pose: Pose,
    in_view: bool,
    streaming: bool,
}

impl Default for SimulatedHand {
    fn default() -> Self {
        Self {
            pointer: Vec2::splat(0.5),
            pose: Pose::Relaxed,
            in_view: true,
            streaming: true,
        }
    }
}

impl SimulatedHand {
    pub fn set_pointer(&mut self, uv: Vec2) {
        self.pointer = uv.clamp(Vec2::ZERO, Vec2::ONE);
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn toggle_in_view(&mut self) {
        self.in_view = !self.in_view;
        log::info!("simulated hand {}", if self.in_view { "in view" } else { "hidden" });
    }

    /// Landmarks for the current pose. The camera image is mirrored, so the
    /// aim point's x is flipped relative to the mouse.
    fn landmarks(&self) -> Vec<Landmark> {
        let aim = Vec2::new(1.0 - self.pointer.x, self.pointer.y);
        let wrist = aim + Vec2::new(0.0, 0.2);
        let index_tip = wrist - Vec2::new(0.0, self.pose.openness());
        let thumb_tip = match self.pose {
            Pose::Pinch => index_tip + Vec2::new(0.01, 0.0),
            _ => index_tip + Vec2::new(0.12, 0.08),
        };
        let mut points: Vec<Landmark> = (0..landmark::COUNT)
            .map(|i| {
                let t = i as f32 / (landmark::COUNT - 1) as f32;
                let p = wrist.lerp(index_tip, t);
                Landmark::new(p.x, p.y)
            })
            .collect();
        points[landmark::WRIST] = Landmark::new(wrist.x, wrist.y);
        points[landmark::THUMB_TIP] = Landmark::new(thumb_tip.x, thumb_tip.y);
        points[landmark::INDEX_TIP] = Landmark::new(index_tip.x, index_tip.y);
        points[landmark::PALM_AIM] = Landmark::new(aim.x, aim.y);
        points
    }
}

impl HandDetector for SimulatedHand {
    fn detect(&mut self, now_ms: f64) -> Option<DetectorFrame> {
        if !self.streaming {
            return None;
        }
        let frame_time = (now_ms / CAMERA_FRAME_MS).floor() * CAMERA_FRAME_MS;
        let hand = if self.in_view {
            accept_hand(self.landmarks())
        } else {
            None
        };
        Some(DetectorFrame { frame_time, hand })
    }

    fn shutdown(&mut self) {
        if self.streaming {
            log::info!("camera released");
            self.streaming = false;
        }
    }
}
