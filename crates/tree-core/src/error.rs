//! Error types for the tree core.
//!
//! None of these are fatal: a failed detector disables gesture input for the
//! session and a malformed landmark set is handled like an empty frame.

use thiserror::Error;

/// The hand-landmark detector could not be started.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("camera permission denied")]
    CameraDenied,
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("hand landmark model failed to load: {0}")]
    ModelLoad(String),
}

/// A detector returned a landmark list that does not fit the hand model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected at least {expected} hand landmarks, got {got}")]
    TooFew { expected: usize, got: usize },
}
