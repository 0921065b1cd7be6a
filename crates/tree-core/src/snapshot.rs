//! GPU-ready per-frame records built from the session.
//!
//! The arrangement rotation is applied here on the CPU so renderers only need
//! a view-projection matrix.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::{EMERALD_RGB, GOLD_RGB, RUBY_RGB};
use crate::particle::{ImageHandle, OrnamentMaterial, OrnamentShape, ParticleKind};
use crate::session::Session;

/// World-space radius of an ornament at scale 1.
pub const ORNAMENT_RADIUS: f32 = 0.3;
/// World-space radius of the aim cursor.
pub const CURSOR_RADIUS: f32 = 0.5;

pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_CRYSTAL: f32 = 1.0;
pub const SHAPE_CURSOR: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OrnamentInstance {
    pub pos: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub spin: f32,
    pub shape: f32,
    pub _pad: [f32; 2],
}

/// Model matrix for one framed photo plus the image it shows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhotoDraw {
    pub image: ImageHandle,
    pub model: Mat4,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PhotoInstance {
    pub model: [[f32; 4]; 4],
}

impl From<&PhotoDraw> for PhotoInstance {
    fn from(draw: &PhotoDraw) -> Self {
        Self {
            model: draw.model.to_cols_array_2d(),
        }
    }
}

pub fn material_rgb(material: OrnamentMaterial) -> [f32; 3] {
    match material {
        OrnamentMaterial::Gold => GOLD_RGB,
        OrnamentMaterial::Emerald => EMERALD_RGB,
        OrnamentMaterial::Ruby => RUBY_RGB,
    }
}

#[inline]
fn spin_angle(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0
}

/// Ornament instances (decorations, then the cursor if visible) for this frame.
pub fn ornament_instances(session: &Session, time_ms: f64, out: &mut Vec<OrnamentInstance>) {
    out.clear();
    let group = session.rotation().group_rotation(time_ms);
    for p in session.registry().decorations() {
        let ParticleKind::Decoration(ornament) = p.kind() else {
            continue;
        };
        let [r, g, b] = material_rgb(ornament.material);
        let current = p.current();
        out.push(OrnamentInstance {
            pos: (group * current.position).to_array(),
            radius: ORNAMENT_RADIUS * current.scale,
            color: [r, g, b, 1.0],
            spin: spin_angle(current.rotation),
            shape: match ornament.shape {
                OrnamentShape::Sphere => SHAPE_SPHERE,
                OrnamentShape::Crystal => SHAPE_CRYSTAL,
            },
            _pad: [0.0; 2],
        });
    }
    let cursor = session.cursor();
    if cursor.visible {
        let [r, g, b] = GOLD_RGB;
        out.push(OrnamentInstance {
            pos: cursor.position.to_array(),
            radius: CURSOR_RADIUS,
            color: [r, g, b, 1.0],
            spin: spin_angle(cursor.rotation()),
            shape: SHAPE_CURSOR,
            _pad: [0.0; 2],
        });
    }
}

/// Photo draws in registry order (oldest first).
pub fn photo_draws(session: &Session, time_ms: f64) -> Vec<PhotoDraw> {
    let group = Mat4::from_quat(session.rotation().group_rotation(time_ms));
    session
        .registry()
        .photos()
        .iter()
        .filter_map(|p| {
            let image = p.image()?;
            let current = p.current();
            let local = Mat4::from_scale_rotation_translation(
                Vec3::splat(current.scale),
                current.rotation,
                current.position,
            );
            Some(PhotoDraw {
                image,
                model: group * local,
            })
        })
        .collect()
}
