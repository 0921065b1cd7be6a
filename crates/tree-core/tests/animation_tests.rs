// Host-side tests for per-frame easing, bob and spin.

use glam::Quat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::animation::{bob_offset, step_all};
use tree_core::*;

fn make_laid_out(mode: Mode, decorations: usize, photos: u64) -> ParticleRegistry {
    let mut rng = StdRng::seed_from_u64(3);
    let mut reg = ParticleRegistry::new(DEFAULT_PHOTO_CAPACITY);
    reg.add_decorations(decorations, &mut rng);
    for i in 0..photos {
        reg.add_photo(ImageHandle(i), &mut rng);
    }
    compute_layout(mode, &mut reg, &mut rng);
    reg
}

#[test]
fn bob_is_bounded_and_phase_shifted() {
    for t in [0.0, 16.7, 1234.5, 98_765.0] {
        assert!(bob_offset(t, 0.0).abs() <= BOB_AMPLITUDE);
    }
    assert_eq!(bob_offset(0.0, 0.0), 0.0);
    assert_ne!(bob_offset(1000.0, 0.0), bob_offset(1000.0, 1.0));
}

#[test]
fn first_step_lerps_by_kind_factor_then_bobs() {
    let mut reg = make_laid_out(Mode::Tree, 12, 3);
    let time_ms = 500.0;
    step_all(&mut reg, Mode::Tree, time_ms);
    for p in reg.all() {
        let target = p.target().position;
        let factor = if p.is_photo() { 0.08 } else { 0.04 };
        let expected = target * factor;
        let bob = bob_offset(time_ms, p.phase_offset());
        let cur = p.current().position;
        assert!((cur.x - expected.x).abs() < 1e-4);
        assert!((cur.z - expected.z).abs() < 1e-4);
        assert!((cur.y - (expected.y + bob)).abs() < 1e-4);
    }
}

#[test]
fn horizontal_position_converges_to_target() {
    let mut reg = make_laid_out(Mode::Focus, 40, 4);
    for frame in 0..600 {
        step_all(&mut reg, Mode::Focus, frame as f64 * 16.0);
    }
    for p in reg.all() {
        let (cur, target) = (p.current().position, p.target().position);
        assert!((cur.x - target.x).abs() < 1e-3, "{cur:?} vs {target:?}");
        assert!((cur.z - target.z).abs() < 1e-3);
    }
}

#[test]
fn scale_and_photo_orientation_snap() {
    let mut reg = make_laid_out(Mode::Focus, 5, 3);
    step_all(&mut reg, Mode::Focus, 0.0);
    for p in reg.all() {
        assert_eq!(p.current().scale, p.target().scale);
    }
    for p in reg.photos() {
        assert_eq!(Some(p.current().rotation), p.target().orientation);
    }
}

#[test]
fn decorations_spin_except_when_scattered() {
    let mut tree = make_laid_out(Mode::Tree, 8, 0);
    step_all(&mut tree, Mode::Tree, 0.0);
    for p in tree.decorations() {
        let expected = Quat::from_rotation_y(DECORATION_SPIN_PER_FRAME);
        assert!(p.current().rotation.angle_between(expected) < 1e-4);
    }

    let mut scatter = make_laid_out(Mode::Scatter, 8, 0);
    for frame in 0..10 {
        step_all(&mut scatter, Mode::Scatter, frame as f64);
    }
    for p in scatter.decorations() {
        assert_eq!(p.current().rotation, Quat::IDENTITY);
    }
}

#[test]
fn photos_do_not_spin() {
    let mut reg = make_laid_out(Mode::Tree, 0, 2);
    for frame in 0..5 {
        step_all(&mut reg, Mode::Tree, frame as f64 * 16.0);
    }
    for p in reg.photos() {
        assert_eq!(Some(p.current().rotation), p.target().orientation);
    }
}
