//! Target placement for each arrangement mode.
//!
//! [`compute_layout`] rewrites the [`Target`] of every particle in the
//! registry. Tree and Focus placements are pure functions of registry order
//! (and each particle's creation seed), so repeated passes agree exactly.
//! Scatter draws fresh positions from the caller's RNG on every pass.

use glam::Vec3;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::particle::{look_at_rotation, Particle, Target};
use crate::registry::ParticleRegistry;
use crate::state::Mode;

/// Recompute targets for all particles for `mode`.
pub fn compute_layout<R: Rng + ?Sized>(mode: Mode, registry: &mut ParticleRegistry, rng: &mut R) {
    debug!(
        "layout {:?}: {} decorations, {} photos",
        mode,
        registry.decoration_count(),
        registry.photo_count()
    );
    match mode {
        Mode::Tree => layout_tree(registry),
        Mode::Scatter => layout_scatter(registry, rng),
        Mode::Focus => layout_focus(registry),
    }
}

fn layout_tree(registry: &mut ParticleRegistry) {
    // Decorations index into the full sequence, which they always lead.
    let total = registry.len();
    for (i, p) in registry.decorations_mut().iter_mut().enumerate() {
        p.target = tree_decoration_target(i, total);
    }
    let photo_count = registry.photo_count();
    for (j, p) in registry.photos_mut().iter_mut().enumerate() {
        p.target = tree_photo_target(j, photo_count);
    }
}

fn layout_scatter<R: Rng + ?Sized>(registry: &mut ParticleRegistry, rng: &mut R) {
    for p in registry.all_mut() {
        p.target = scatter_target(p.is_photo(), rng);
    }
}

fn layout_focus(registry: &mut ParticleRegistry) {
    for p in registry.decorations_mut().iter_mut() {
        p.target = focus_ring_target(p);
    }
    let photo_count = registry.photo_count();
    for (j, p) in registry.photos_mut().iter_mut().enumerate() {
        p.target = focus_photo_target(j, photo_count);
    }
}

/// Point on the tightening decoration spiral for entity `index` of `total`.
pub fn tree_decoration_target(index: usize, total: usize) -> Target {
    let ratio = index as f32 / total.max(1) as f32;
    let radius = TREE_DECORATION_RADIUS * (1.0 - ratio);
    let angle = ratio * TREE_DECORATION_TURNS;
    let height = ratio * TREE_DECORATION_HEIGHT - TREE_DECORATION_HEIGHT * 0.5;
    Target {
        position: Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
        orientation: None,
        scale: TREE_DECORATION_SCALE,
    }
}

/// Point on the sparse outer photo spiral, facing the trunk at its own height.
pub fn tree_photo_target(index: usize, count: usize) -> Target {
    let ratio = (index + 1) as f32 / (count + 1) as f32;
    let angle = ratio * TREE_PHOTO_TURNS;
    let radius = TREE_PHOTO_RADIUS * (1.0 - ratio * TREE_PHOTO_TAPER);
    let height = ratio * TREE_PHOTO_HEIGHT - TREE_PHOTO_HEIGHT * 0.5;
    let position = Vec3::new(angle.cos() * radius, height, angle.sin() * radius);
    Target {
        position,
        orientation: Some(look_at_rotation(position, Vec3::new(0.0, height, 0.0))),
        scale: TREE_PHOTO_SCALE,
    }
}

/// Uniform point in the scatter box.
pub fn scatter_target<R: Rng + ?Sized>(is_photo: bool, rng: &mut R) -> Target {
    let h = scatter_half_extents_vec3();
    let position = Vec3::new(
        rng.gen_range(-h.x..=h.x),
        rng.gen_range(-h.y..=h.y),
        rng.gen_range(-h.z..=h.z),
    );
    Target {
        position,
        orientation: None,
        scale: if is_photo {
            SCATTER_PHOTO_SCALE
        } else {
            SCATTER_DECORATION_SCALE
        },
    }
}

/// Slot `index` of `count` on the gallery arc in front of the tree.
pub fn focus_photo_target(index: usize, count: usize) -> Target {
    let denom = count.saturating_sub(1).max(1) as f32;
    let angle = (index as f32 / denom - 0.5) * FOCUS_ARC_SPAN;
    let position = Vec3::new(
        angle.sin() * FOCUS_ARC_RADIUS,
        FOCUS_PHOTO_HEIGHT,
        angle.cos() * FOCUS_ARC_RADIUS + FOCUS_ARC_Z_OFFSET,
    );
    Target {
        position,
        orientation: Some(look_at_rotation(position, focus_look_at_vec3())),
        scale: FOCUS_PHOTO_SCALE,
    }
}

/// Random slot on the receding outer ring, drawn from the particle's own seed.
pub fn focus_ring_target(particle: &Particle) -> Target {
    let mut rng = StdRng::seed_from_u64(particle.seed());
    let radius = FOCUS_RING_RADIUS_MIN + rng.gen::<f32>() * FOCUS_RING_RADIUS_SPAN;
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let height = (rng.gen::<f32>() - 0.5) * FOCUS_RING_HALF_HEIGHT * 2.0;
    Target {
        position: Vec3::new(theta.cos() * radius, height, theta.sin() * radius),
        orientation: None,
        scale: FOCUS_DECORATION_SCALE,
    }
}
