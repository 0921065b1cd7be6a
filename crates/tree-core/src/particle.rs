//! A single animated point in the scene: either a decorative ornament or a
//! framed photo tile.
//!
//! The layout engine owns the [`Target`] half of a particle and the animation
//! stepper owns the [`Transform`] half. Both live in this crate so the fields
//! are `pub(crate)`; frontends only read them.

use glam::{Quat, Vec3};
use rand::Rng;

use crate::constants::{DECORATION_SMOOTHING, PHASE_OFFSET_RANGE, PHOTO_SMOOTHING};

/// Registry-unique identity of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Opaque handle to an image resource owned by the frontend (usually a texture).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentShape {
    Sphere,
    Crystal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentMaterial {
    Gold,
    Emerald,
    Ruby,
}

/// Geometry/material variant of a decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ornament {
    pub shape: OrnamentShape,
    pub material: OrnamentMaterial,
}

impl Ornament {
    /// Half spheres, half crystals; 40% gold and the rest split between emerald and ruby.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let shape = if rng.gen::<f32>() > 0.5 {
            OrnamentShape::Sphere
        } else {
            OrnamentShape::Crystal
        };
        let material = if rng.gen::<f32>() > 0.6 {
            OrnamentMaterial::Gold
        } else if rng.gen::<f32>() > 0.5 {
            OrnamentMaterial::Emerald
        } else {
            OrnamentMaterial::Ruby
        };
        Self { shape, material }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Decoration(Ornament),
    Photo(ImageHandle),
}

impl ParticleKind {
    /// Per-frame positional smoothing factor; photos settle twice as fast.
    #[inline]
    pub fn smoothing_factor(&self) -> f32 {
        match self {
            ParticleKind::Decoration(_) => DECORATION_SMOOTHING,
            ParticleKind::Photo(_) => PHOTO_SMOOTHING,
        }
    }
}

/// Rendered transform, advanced every frame by the animation stepper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Layout target. `orientation` is only set for photos, which face a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub position: Vec3,
    pub orientation: Option<Quat>,
    pub scale: f32,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: None,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    id: EntityId,
    kind: ParticleKind,
    phase_offset: f32,
    seed: u64,
    pub(crate) current: Transform,
    pub(crate) target: Target,
}

impl Particle {
    pub(crate) fn new<R: Rng + ?Sized>(id: EntityId, kind: ParticleKind, rng: &mut R) -> Self {
        Self {
            id,
            kind,
            phase_offset: rng.gen::<f32>() * PHASE_OFFSET_RANGE,
            seed: rng.gen(),
            current: Transform::default(),
            target: Target::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }
    #[inline]
    pub fn kind(&self) -> ParticleKind {
        self.kind
    }
    #[inline]
    pub fn is_photo(&self) -> bool {
        matches!(self.kind, ParticleKind::Photo(_))
    }
    #[inline]
    pub fn image(&self) -> Option<ImageHandle> {
        match self.kind {
            ParticleKind::Photo(handle) => Some(handle),
            ParticleKind::Decoration(_) => None,
        }
    }
    #[inline]
    pub fn smoothing_factor(&self) -> f32 {
        self.kind.smoothing_factor()
    }
    #[inline]
    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }
    /// Stable per-entity seed for layouts that must look random but repeat exactly.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
    #[inline]
    pub fn current(&self) -> &Transform {
        &self.current
    }
    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }
}

/// Rotation whose local +Z axis points from `from` towards `to`, keeping +Y up.
///
/// Falls back to identity when the points coincide and picks a different up
/// axis when the direction is vertical.
pub fn look_at_rotation(from: Vec3, to: Vec3) -> Quat {
    let forward = to - from;
    if forward.length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    let z = forward.normalize();
    let up = if z.cross(Vec3::Y).length_squared() <= 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&glam::Mat3::from_cols(x, y, z))
}
