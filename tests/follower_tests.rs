// Host-side tests for the pointer follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod follower {
    include!("../src/core/follower.rs");
}

use follower::*;
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn step_moves_thirty_percent_of_remaining_distance() {
    let mut f = Follower::default();
    f.record_pointer(100.0, 50.0);

    let p = f.step();
    assert!(approx(p, Vec2::new(30.0, 15.0)), "got {:?}", p);

    // Second frame covers 30% of the remaining (70, 35)
    let p = f.step();
    assert!(approx(p, Vec2::new(51.0, 25.5)), "got {:?}", p);
}

#[test]
fn step_uses_latest_pointer_only() {
    let mut f = Follower::default();
    // Several moves between two frames coalesce into the last one
    f.record_pointer(10.0, 10.0);
    f.record_pointer(500.0, -20.0);
    f.record_pointer(-40.0, 80.0);

    let p = f.step();
    assert!(approx(p, Vec2::new(-12.0, 24.0)), "got {:?}", p);
}

#[test]
fn arbitrary_pointer_sequence_follows_formula() {
    let pointers = [
        (12.0, 7.0),
        (300.0, 140.0),
        (299.0, 141.0),
        (-50.0, 0.0),
        (0.0, 900.0),
    ];
    let mut f = Follower::default();
    let mut expected = Vec2::ZERO;
    for (x, y) in pointers {
        f.record_pointer(x, y);
        let pointer = Vec2::new(x, y);
        expected = expected + 0.30 * (pointer - expected);
        let p = f.step();
        assert!(approx(p, expected), "got {:?}, want {:?}", p, expected);
    }
}

#[test]
fn follower_converges_to_pointer() {
    let mut f = Follower::default();
    f.record_pointer(1234.0, -567.0);
    let target = Vec2::new(1234.0, -567.0);

    let mut prev = (target - f.position).length();
    for _ in 0..100 {
        f.step();
        let d = (target - f.position).length();
        assert!(d <= prev);
        prev = d;
    }
    assert!(prev < 1e-2, "still {} away", prev);
    assert!(f.position.is_finite());
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut f = Follower::default();
    f.record_pointer(20.0, 40.0);
    f.record_pointer(f32::NAN, 3.0);
    f.record_pointer(1.0, f32::INFINITY);
    assert_eq!(f.pointer, Vec2::new(20.0, 40.0));
    assert!(f.step().is_finite());
}

#[test]
fn transform_carries_hover_scale() {
    let mut f = Follower {
        position: Vec2::new(10.0, 20.5),
        ..Default::default()
    };
    assert_eq!(f.transform(), "translate(10px, 20.5px) scale(1)");

    f.enter_hover();
    assert_eq!(f.transform(), "translate(10px, 20.5px) scale(1.3)");

    f.leave_hover();
    assert_eq!(f.scale(), 1.0);
}

#[test]
fn nested_hover_targets_keep_scale_until_all_left() {
    let mut f = Follower::default();
    // Enter a card, then a link inside it, then back onto the card body
    f.enter_hover();
    f.enter_hover();
    f.leave_hover();
    assert!(f.is_hovered());
    assert_eq!(f.scale(), 1.3);

    // Leaving the card drops back to neutral
    f.leave_hover();
    assert!(!f.is_hovered());
    assert_eq!(f.scale(), 1.0);
}

#[test]
fn unmatched_leave_does_not_underflow() {
    let mut f = Follower::default();
    f.leave_hover();
    f.leave_hover();
    assert_eq!(f.hover_depth, 0);
    f.enter_hover();
    assert_eq!(f.scale(), 1.3);
}
