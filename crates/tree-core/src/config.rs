use crate::constants::{CONSTRAINED_DECORATION_COUNT, DEFAULT_PHOTO_CAPACITY, DESKTOP_DECORATION_COUNT};
use crate::gesture::GestureThresholds;

/// Hardware class the session runs on; constrained devices get fewer ornaments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Constrained,
}

impl DeviceProfile {
    pub fn decoration_count(&self) -> usize {
        match self {
            DeviceProfile::Desktop => DESKTOP_DECORATION_COUNT,
            DeviceProfile::Constrained => CONSTRAINED_DECORATION_COUNT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub profile: DeviceProfile,
    /// Overrides the profile's decoration count when set.
    pub decoration_count: Option<usize>,
    pub photo_capacity: usize,
    pub thresholds: GestureThresholds,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            profile: DeviceProfile::Desktop,
            decoration_count: None,
            photo_capacity: DEFAULT_PHOTO_CAPACITY,
            thresholds: GestureThresholds::default(),
            seed: 42,
        }
    }
}

impl SessionConfig {
    pub fn with_profile(mut self, profile: DeviceProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_decoration_count(mut self, count: usize) -> Self {
        self.decoration_count = Some(count);
        self
    }

    pub fn with_photo_capacity(mut self, capacity: usize) -> Self {
        self.photo_capacity = capacity;
        self
    }

    pub fn with_thresholds(mut self, thresholds: GestureThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn decorations(&self) -> usize {
        self.decoration_count
            .unwrap_or_else(|| self.profile.decoration_count())
    }
}
