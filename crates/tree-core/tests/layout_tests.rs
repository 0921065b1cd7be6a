// Host-side tests for target placement in each arrangement mode.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::layout::{focus_photo_target, tree_decoration_target, tree_photo_target};
use tree_core::*;

const EPS: f32 = 1e-4;

fn make_registry(decorations: usize, photos: u64) -> (ParticleRegistry, StdRng) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut reg = ParticleRegistry::new(DEFAULT_PHOTO_CAPACITY);
    reg.add_decorations(decorations, &mut rng);
    for i in 0..photos {
        reg.add_photo(ImageHandle(i), &mut rng);
    }
    (reg, rng)
}

fn targets(reg: &ParticleRegistry) -> Vec<Target> {
    reg.all().map(|p| *p.target()).collect()
}

fn horizontal_radius(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Local +Z of the target orientation, i.e. the way a photo faces.
fn facing(t: &Target) -> Vec3 {
    t.orientation.expect("photo target without orientation") * Vec3::Z
}

#[test]
fn tree_decorations_stay_inside_cone() {
    let (mut reg, mut rng) = make_registry(DESKTOP_DECORATION_COUNT, 0);
    compute_layout(Mode::Tree, &mut reg, &mut rng);
    for p in reg.decorations() {
        let t = p.target();
        assert!(t.position.y >= -14.0 - EPS && t.position.y <= 14.0 + EPS, "{t:?}");
        assert!(horizontal_radius(t.position) <= 12.0 + EPS, "{t:?}");
        assert_eq!(t.scale, TREE_DECORATION_SCALE);
        assert!(t.orientation.is_none());
    }
    // Spiral starts wide at the bottom and tightens towards the top.
    let first = reg.decorations()[0].target().position;
    let last = reg.decorations()[DESKTOP_DECORATION_COUNT - 1].target().position;
    assert!((first - Vec3::new(12.0, -14.0, 0.0)).length() < EPS);
    assert!(horizontal_radius(last) < 0.1);
    assert!(last.y > 13.9);
}

#[test]
fn tree_decorations_index_into_full_sequence() {
    // Adding photos lengthens the sequence, so decoration targets shift.
    let (mut reg, mut rng) = make_registry(10, 0);
    compute_layout(Mode::Tree, &mut reg, &mut rng);
    let before = targets(&reg);
    reg.add_photo(ImageHandle(0), &mut rng);
    compute_layout(Mode::Tree, &mut reg, &mut rng);
    assert_eq!(*reg.decorations()[3].target(), tree_decoration_target(3, 11));
    assert_ne!(before[3], *reg.decorations()[3].target());
    assert_eq!(*reg.decorations()[0].target(), before[0]);
}

#[test]
fn tree_photos_face_trunk_at_own_height() {
    let (mut reg, mut rng) = make_registry(20, 6);
    compute_layout(Mode::Tree, &mut reg, &mut rng);
    for (j, p) in reg.photos().iter().enumerate() {
        let t = p.target();
        assert_eq!(*t, tree_photo_target(j, 6));
        assert_eq!(t.scale, TREE_PHOTO_SCALE);
        let inward = (Vec3::new(0.0, t.position.y, 0.0) - t.position).normalize();
        assert!(facing(t).dot(inward) > 0.999, "photo {j} faces {:?}", facing(t));
        // ratio in (0, 1) keeps photos strictly inside the spiral's extents.
        assert!(t.position.y.abs() < 15.0);
        assert!(horizontal_radius(t.position) <= 14.0 + EPS);
    }
}

#[test]
fn tree_and_focus_layouts_are_idempotent() {
    for mode in [Mode::Tree, Mode::Focus] {
        let (mut reg, mut rng) = make_registry(300, 7);
        compute_layout(mode, &mut reg, &mut rng);
        let first = targets(&reg);
        compute_layout(mode, &mut reg, &mut rng);
        assert_eq!(first, targets(&reg), "{mode:?} moved on second pass");
    }
}

#[test]
fn scatter_stays_in_box_and_reshuffles() {
    let (mut reg, mut rng) = make_registry(500, 5);
    compute_layout(Mode::Scatter, &mut reg, &mut rng);
    let first = targets(&reg);
    for p in reg.all() {
        let t = p.target();
        assert!(t.position.x.abs() <= 40.0);
        assert!(t.position.y.abs() <= 25.0);
        assert!(t.position.z.abs() <= 30.0);
        let expected = if p.is_photo() { 1.0 } else { 1.2 };
        assert_eq!(t.scale, expected);
    }
    compute_layout(Mode::Scatter, &mut reg, &mut rng);
    assert_ne!(first, targets(&reg), "scatter should draw fresh positions");
}

#[test]
fn focus_arc_faces_viewer() {
    let (mut reg, mut rng) = make_registry(50, 5);
    compute_layout(Mode::Focus, &mut reg, &mut rng);
    let look_at = focus_look_at_vec3();
    let photos: Vec<Target> = reg.photos().iter().map(|p| *p.target()).collect();
    for (j, t) in photos.iter().enumerate() {
        assert_eq!(t.position.y, 2.0);
        assert_eq!(t.scale, 1.4);
        let arc_center = Vec3::new(0.0, 2.0, -15.0);
        assert!(((t.position - arc_center).length() - 30.0).abs() < 1e-3);
        let toward = (look_at - t.position).normalize();
        assert!(facing(t).dot(toward) > 0.999, "photo {j}");
    }
    // Arc runs left to right and is symmetric about x = 0.
    assert!(photos[0].position.x < 0.0);
    assert!(photos[4].position.x > 0.0);
    assert!((photos[0].position.x + photos[4].position.x).abs() < 1e-3);
    assert!(photos[2].position.x.abs() < 1e-3);
}

#[test]
fn focus_single_photo_has_finite_slot() {
    let t = focus_photo_target(0, 1);
    assert!(t.position.is_finite());
    assert!(t.orientation.unwrap().is_finite());
    // With one slot the angle is -span/2, the arc's left end.
    assert_eq!(t, focus_photo_target(0, 2));
}

#[test]
fn focus_decorations_recede_to_ring() {
    let (mut reg, mut rng) = make_registry(400, 2);
    compute_layout(Mode::Focus, &mut reg, &mut rng);
    for p in reg.decorations() {
        let t = p.target();
        let r = horizontal_radius(t.position);
        assert!((50.0 - EPS..=70.0 + EPS).contains(&r), "radius {r}");
        assert!(t.position.y.abs() <= 20.0 + EPS);
        assert_eq!(t.scale, 0.4);
        assert!(t.orientation.is_none());
    }
}

#[test]
fn every_mode_handles_empty_partitions() {
    let cases = [(0usize, 0u64), (0, 3), (25, 0)];
    for (decorations, photos) in cases {
        for mode in [Mode::Tree, Mode::Scatter, Mode::Focus] {
            let (mut reg, mut rng) = make_registry(decorations, photos);
            compute_layout(mode, &mut reg, &mut rng);
            for t in targets(&reg) {
                assert!(t.position.is_finite(), "{mode:?} {decorations}/{photos}: {t:?}");
                assert!(t.scale.is_finite() && t.scale > 0.0);
                if let Some(q) = t.orientation {
                    assert!(q.is_finite());
                }
            }
        }
    }
}

#[test]
fn every_particle_gets_a_target() {
    for mode in [Mode::Tree, Mode::Scatter, Mode::Focus] {
        let (mut reg, mut rng) = make_registry(30, 4);
        compute_layout(mode, &mut reg, &mut rng);
        let expected_scale = |p: &Particle| match (mode, p.is_photo()) {
            (Mode::Tree, false) => TREE_DECORATION_SCALE,
            (Mode::Tree, true) => TREE_PHOTO_SCALE,
            (Mode::Scatter, false) => SCATTER_DECORATION_SCALE,
            (Mode::Scatter, true) => SCATTER_PHOTO_SCALE,
            (Mode::Focus, false) => FOCUS_DECORATION_SCALE,
            (Mode::Focus, true) => FOCUS_PHOTO_SCALE,
        };
        for p in reg.all() {
            assert_eq!(p.target().scale, expected_scale(p));
            assert_eq!(p.target().orientation.is_some(), p.is_photo() && mode != Mode::Scatter);
        }
    }
}

#[test]
fn look_at_handles_degenerate_directions() {
    assert_eq!(look_at_rotation(Vec3::ONE, Vec3::ONE), glam::Quat::IDENTITY);
    let q = look_at_rotation(Vec3::ZERO, Vec3::Y * 5.0);
    assert!(q.is_finite());
    assert!((q * Vec3::Z - Vec3::Y).length() < 1e-4);
}
