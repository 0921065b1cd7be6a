// Host-side tests for gesture classification and the frame-driven classifier.

use glam::Vec2;
use tree_core::*;

/// Hand with the wrist at (0.5, 0.9), the index tip `openness` above it and
/// the thumb tip `pinch` to the right of the index tip.
fn make_hand(pinch: f32, openness: f32, aim: Vec2) -> HandLandmarks {
    let wrist = Vec2::new(0.5, 0.9);
    let index = wrist - Vec2::new(0.0, openness);
    let thumb = index + Vec2::new(pinch, 0.0);
    let mut points = vec![Landmark::new(0.5, 0.5); landmark::COUNT];
    points[landmark::WRIST] = Landmark::new(wrist.x, wrist.y);
    points[landmark::INDEX_TIP] = Landmark::new(index.x, index.y);
    points[landmark::THUMB_TIP] = Landmark::new(thumb.x, thumb.y);
    points[landmark::PALM_AIM] = Landmark::new(aim.x, aim.y);
    HandLandmarks::new(points).expect("full landmark set")
}

fn make_frame(frame_time: f64, pinch: f32, openness: f32) -> DetectorFrame {
    DetectorFrame {
        frame_time,
        hand: Some(make_hand(pinch, openness, Vec2::splat(0.5))),
    }
}

fn signals(pinch: f32, openness: f32) -> HandSignals {
    HandSignals {
        pinch_distance: pinch,
        palm_openness: openness,
        aim: Vec2::splat(0.5),
    }
}

#[test]
fn signals_measure_planar_distances() {
    let hand = make_hand(0.1, 0.3, Vec2::new(0.2, 0.7));
    let s = hand.signals();
    assert!((s.pinch_distance - 0.1).abs() < 1e-5);
    assert!((s.palm_openness - 0.3).abs() < 1e-5);
    assert_eq!(s.aim, Vec2::new(0.2, 0.7));
}

#[test]
fn depth_is_ignored() {
    let mut a = Landmark::new(0.0, 0.0);
    let b = Landmark::new(0.3, 0.4);
    a.z = 10.0;
    assert!((planar_distance(&a, &b) - 0.5).abs() < 1e-6);
}

#[test]
fn classify_follows_priority_order() {
    let t = GestureThresholds::default();
    assert_eq!(classify(&signals(0.02, 0.40), &t), Some(Mode::Focus));
    // Pinch wins even over a fist or an open palm.
    assert_eq!(classify(&signals(0.02, 0.10), &t), Some(Mode::Focus));
    assert_eq!(classify(&signals(0.02, 0.90), &t), Some(Mode::Focus));
    assert_eq!(classify(&signals(0.20, 0.10), &t), Some(Mode::Tree));
    assert_eq!(classify(&signals(0.20, 0.70), &t), Some(Mode::Scatter));
    assert_eq!(classify(&signals(0.20, 0.40), &t), None);
}

#[test]
fn thresholds_are_strict() {
    let t = GestureThresholds::default();
    assert_eq!(classify(&signals(t.pinch, 0.40), &t), None);
    assert_eq!(classify(&signals(0.20, t.fist), &t), None);
    assert_eq!(classify(&signals(0.20, t.open), &t), None);
}

#[test]
fn custom_thresholds_are_respected() {
    let t = GestureThresholds {
        pinch: 0.1,
        fist: 0.3,
        open: 0.5,
    };
    assert_eq!(classify(&signals(0.08, 0.40), &t), Some(Mode::Focus));
    assert_eq!(classify(&signals(0.20, 0.28), &t), Some(Mode::Tree));
    assert_eq!(classify(&signals(0.20, 0.55), &t), Some(Mode::Scatter));
}

#[test]
fn dead_band_keeps_mode() {
    // Open, then drift back through the dead band, then close to a fist.
    let mut c = GestureClassifier::default();
    let mut mode = Mode::Tree;
    let mut transitions = Vec::new();
    for (i, openness) in [0.70, 0.50, 0.30, 0.50, 0.20].into_iter().enumerate() {
        let out = c
            .process(&make_frame(i as f64, 0.2, openness), mode)
            .expect("fresh frame");
        if let Some(next) = out.transition {
            transitions.push(next);
            mode = next;
        }
        if (0.25..=0.60).contains(&openness) {
            assert_eq!(out.transition, None, "openness {openness} must not switch");
        }
    }
    assert_eq!(transitions, vec![Mode::Scatter, Mode::Tree]);
}

#[test]
fn steady_gesture_emits_one_transition() {
    let mut c = GestureClassifier::default();
    let mut mode = Mode::Tree;
    let mut count = 0;
    for i in 0..30 {
        let out = c.process(&make_frame(i as f64 * 33.0, 0.01, 0.40), mode).unwrap();
        if let Some(next) = out.transition {
            assert_ne!(next, mode);
            mode = next;
            count += 1;
        }
    }
    assert_eq!(count, 1);
    assert_eq!(mode, Mode::Focus);
}

#[test]
fn matching_current_mode_is_not_a_transition() {
    let mut c = GestureClassifier::default();
    let out = c.process(&make_frame(0.0, 0.2, 0.1), Mode::Tree).unwrap();
    assert_eq!(out.transition, None);
    assert!(matches!(out.pointer, PointerSignal::Show(_)));
}

#[test]
fn repeated_frame_time_is_skipped() {
    let mut c = GestureClassifier::default();
    let frame = make_frame(100.0, 0.2, 0.7);
    assert!(c.process(&frame, Mode::Tree).is_some());
    assert!(c.process(&frame, Mode::Tree).is_none());
    assert!(c.process(&make_frame(100.0, 0.01, 0.4), Mode::Tree).is_none());
    assert!(c.process(&make_frame(133.0, 0.2, 0.7), Mode::Tree).is_some());
}

#[test]
fn missing_hand_hides_pointer_without_transition() {
    let mut c = GestureClassifier::default();
    let out = c
        .process(&DetectorFrame { frame_time: 1.0, hand: None }, Mode::Scatter)
        .unwrap();
    assert_eq!(
        out,
        GestureOutput {
            transition: None,
            pointer: PointerSignal::Hide,
        }
    );
}

#[test]
fn pointer_carries_aim_landmark() {
    let mut c = GestureClassifier::default();
    let frame = DetectorFrame {
        frame_time: 0.0,
        hand: Some(make_hand(0.2, 0.4, Vec2::new(0.25, 0.75))),
    };
    let out = c.process(&frame, Mode::Tree).unwrap();
    assert_eq!(out.pointer, PointerSignal::Show(Vec2::new(0.25, 0.75)));
}

#[test]
fn short_landmark_list_is_rejected() {
    let err = HandLandmarks::new(vec![Landmark::default(); 5]).unwrap_err();
    assert_eq!(err, LandmarkError::TooFew { expected: 21, got: 5 });
    assert!(accept_hand(vec![Landmark::default(); 20]).is_none());
    assert!(accept_hand(vec![Landmark::default(); 21]).is_some());
}
