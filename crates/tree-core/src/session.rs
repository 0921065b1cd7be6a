//! The owned, mutable session context shared by the render and gesture ticks.
//!
//! Both ticks run on one logical thread and take `&mut Session`, so a mode
//! change (classify, set mode, rewrite every target) always completes before
//! the next render tick reads targets. Photo uploads are applied the same way:
//! eviction, append and re-layout happen inside one call.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation;
use crate::config::SessionConfig;
use crate::constants::{STATUS_GESTURE_UNAVAILABLE, STATUS_INITIALIZING, STATUS_PHOTOS_ADDED, STATUS_READY};
use crate::error::DetectorError;
use crate::gesture::{DetectorFrame, GestureClassifier, HandDetector, PointerSignal};
use crate::layout::compute_layout;
use crate::particle::ImageHandle;
use crate::registry::ParticleRegistry;
use crate::state::{Cursor, Mode, RotationState};

/// A discrete arrangement switch caused by a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub from: Mode,
    pub to: Mode,
    pub status: &'static str,
}

pub struct Session {
    config: SessionConfig,
    registry: ParticleRegistry,
    classifier: GestureClassifier,
    mode: Mode,
    rotation: RotationState,
    cursor: Cursor,
    status: String,
    gestures_enabled: bool,
    rng: StdRng,
}

impl Session {
    /// Seed the decorations and lay them out as a tree.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut registry = ParticleRegistry::new(config.photo_capacity);
        registry.add_decorations(config.decorations(), &mut rng);
        let mode = Mode::default();
        compute_layout(mode, &mut registry, &mut rng);
        info!(
            "session started: {} decorations, photo capacity {}",
            registry.decoration_count(),
            registry.capacity()
        );
        Self {
            classifier: GestureClassifier::new(config.thresholds),
            config,
            registry,
            mode,
            rotation: RotationState::default(),
            cursor: Cursor::default(),
            status: STATUS_INITIALIZING.to_string(),
            gestures_enabled: true,
            rng,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn status(&self) -> &str {
        &self.status
    }
    pub fn registry(&self) -> &ParticleRegistry {
        &self.registry
    }
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }
    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// The detector finished loading and the camera is streaming.
    pub fn detector_ready(&mut self) {
        if !self.gestures_enabled {
            return;
        }
        info!("hand detector ready");
        self.status = STATUS_READY.to_string();
    }

    /// Gesture input is off for the rest of the session; rendering continues.
    pub fn detector_unavailable(&mut self, err: &DetectorError) {
        warn!("gesture input disabled: {err}");
        self.gestures_enabled = false;
        self.cursor.hide();
        self.status = STATUS_GESTURE_UNAVAILABLE.to_string();
    }

    /// Pull one frame from `detector` and apply it.
    pub fn gesture_tick(&mut self, detector: &mut dyn HandDetector, now_ms: f64) -> Option<ModeChange> {
        if !self.gestures_enabled {
            return None;
        }
        let frame = detector.detect(now_ms)?;
        self.on_detector_frame(&frame)
    }

    /// Apply one detector frame: aim, cursor and (maybe) a mode transition.
    pub fn on_detector_frame(&mut self, frame: &DetectorFrame) -> Option<ModeChange> {
        if !self.gestures_enabled {
            return None;
        }
        let output = self.classifier.process(frame, self.mode)?;
        match output.pointer {
            PointerSignal::Show(aim) => {
                self.rotation.aim(aim);
                self.cursor.show(aim);
            }
            PointerSignal::Hide => self.cursor.hide(),
        }
        output.transition.map(|next| self.transition_to(next))
    }

    fn transition_to(&mut self, next: Mode) -> ModeChange {
        let change = ModeChange {
            from: self.mode,
            to: next,
            status: next.gesture_status(),
        };
        info!("mode {:?} -> {:?}", change.from, change.to);
        self.mode = next;
        self.status = change.status.to_string();
        self.relayout();
        change
    }

    /// Rewrite every target for the current mode.
    pub fn relayout(&mut self) {
        compute_layout(self.mode, &mut self.registry, &mut self.rng);
    }

    /// Add one decoded photo and re-layout without changing mode.
    ///
    /// Returns the image of the evicted photo, if any, so its resource can be freed.
    pub fn add_photo(&mut self, image: ImageHandle) -> Option<ImageHandle> {
        let evicted = self.registry.add_photo(image, &mut self.rng);
        self.relayout();
        info!(
            "photo {:?} added ({}/{})",
            image,
            self.registry.photo_count(),
            self.registry.capacity()
        );
        evicted.and_then(|p| p.image())
    }

    /// Add a batch of decoded photos, one eviction + re-layout turn each.
    pub fn add_photos<I: IntoIterator<Item = ImageHandle>>(&mut self, images: I) -> Vec<ImageHandle> {
        let mut added = false;
        let mut evicted = Vec::new();
        for image in images {
            added = true;
            evicted.extend(self.add_photo(image));
        }
        if added {
            self.status = STATUS_PHOTOS_ADDED.to_string();
        }
        evicted
    }

    /// One display frame: ease rotation, step every particle, spin the cursor.
    pub fn render_tick(&mut self, time_ms: f64) {
        self.rotation.step();
        animation::step_all(&mut self.registry, self.mode, time_ms);
        self.cursor.step();
    }
}
