//! Hand-gesture classification.
//!
//! A detector yields, per camera frame, zero or one hand as 21 normalized
//! image-space landmarks. Two scalars are derived from them:
//!
//! * **pinch distance**: thumb tip to index tip
//! * **palm openness**: index tip to wrist
//!
//! and matched in priority order (pinch, then fist, then open palm). Values
//! between the fist and open thresholds match nothing, which keeps the current
//! mode and stops flicker near either boundary.

use glam::Vec2;
use log::warn;
use smallvec::SmallVec;

use crate::constants::{FIST_THRESHOLD, OPEN_THRESHOLD, PINCH_THRESHOLD};
use crate::error::LandmarkError;
use crate::state::Mode;

/// Landmark indices of the 21-point hand model.
pub mod landmark {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
    /// Knuckle at the base of the middle finger; the steadiest point for aiming.
    pub const PALM_AIM: usize = 9;
    pub const COUNT: usize = 21;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// In-image distance between two landmarks; depth is ignored.
#[inline]
pub fn planar_distance(a: &Landmark, b: &Landmark) -> f32 {
    a.xy().distance(b.xy())
}

/// One detected hand, validated to contain the full landmark set.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: SmallVec<[Landmark; landmark::COUNT]>,
}

impl HandLandmarks {
    pub fn new<I: IntoIterator<Item = Landmark>>(points: I) -> Result<Self, LandmarkError> {
        let points: SmallVec<[Landmark; landmark::COUNT]> = points.into_iter().collect();
        if points.len() < landmark::COUNT {
            return Err(LandmarkError::TooFew {
                expected: landmark::COUNT,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    pub fn signals(&self) -> HandSignals {
        HandSignals {
            pinch_distance: planar_distance(
                self.point(landmark::THUMB_TIP),
                self.point(landmark::INDEX_TIP),
            ),
            palm_openness: planar_distance(
                self.point(landmark::INDEX_TIP),
                self.point(landmark::WRIST),
            ),
            aim: self.point(landmark::PALM_AIM).xy(),
        }
    }
}

/// Scalars derived from one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSignals {
    pub pinch_distance: f32,
    pub palm_openness: f32,
    /// Normalized (x, y) of the aim landmark, used for rotation and the cursor.
    pub aim: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Pinch distance below which the gallery opens.
    pub pinch: f32,
    /// Palm openness below which the hand reads as a fist.
    pub fist: f32,
    /// Palm openness above which the hand reads as open.
    pub open: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch: PINCH_THRESHOLD,
            fist: FIST_THRESHOLD,
            open: OPEN_THRESHOLD,
        }
    }
}

/// Target mode for a hand, or `None` inside the dead band.
///
/// First match wins: a pinch beats palm openness even when both hold.
pub fn classify(signals: &HandSignals, thresholds: &GestureThresholds) -> Option<Mode> {
    if signals.pinch_distance < thresholds.pinch {
        Some(Mode::Focus)
    } else if signals.palm_openness < thresholds.fist {
        Some(Mode::Tree)
    } else if signals.palm_openness > thresholds.open {
        Some(Mode::Scatter)
    } else {
        None
    }
}

/// What the detector saw in one camera frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorFrame {
    /// Timestamp of the underlying camera frame; repeats mean no new image.
    pub frame_time: f64,
    pub hand: Option<HandLandmarks>,
}

/// Source of hand landmarks, typically a camera plus an inference model.
pub trait HandDetector {
    /// Run inference on the latest camera frame, if the camera has one.
    fn detect(&mut self, now_ms: f64) -> Option<DetectorFrame>;
    /// Release the camera and model. Called once at teardown.
    fn shutdown(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Show(Vec2),
    Hide,
}

/// Result of classifying one new camera frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOutput {
    /// Set only when the classified mode differs from the current one.
    pub transition: Option<Mode>,
    pub pointer: PointerSignal,
}

/// Turns detector frames into mode transitions, skipping repeated frames.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    last_frame_time: Option<f64>,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            last_frame_time: None,
        }
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    /// Classify `frame` against the `current` mode.
    ///
    /// Returns `None` when the frame repeats the previous camera timestamp.
    pub fn process(&mut self, frame: &DetectorFrame, current: Mode) -> Option<GestureOutput> {
        if self.last_frame_time == Some(frame.frame_time) {
            return None;
        }
        self.last_frame_time = Some(frame.frame_time);

        let Some(hand) = &frame.hand else {
            return Some(GestureOutput {
                transition: None,
                pointer: PointerSignal::Hide,
            });
        };
        let signals = hand.signals();
        let transition = classify(&signals, &self.thresholds).filter(|next| *next != current);
        Some(GestureOutput {
            transition,
            pointer: PointerSignal::Show(signals.aim),
        })
    }
}

/// Build a hand from raw detector output, treating a short list as no hand.
pub fn accept_hand(points: Vec<Landmark>) -> Option<HandLandmarks> {
    match HandLandmarks::new(points) {
        Ok(hand) => Some(hand),
        Err(e) => {
            warn!("discarding hand: {e}");
            None
        }
    }
}
