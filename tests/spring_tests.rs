// Host-side tests for the damped spring integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use crate::core::spring::*;
use glam::Vec3;

const BOUNCY: SpringConfig = SpringConfig {
    tension: 180.0,
    friction: 12.0,
    mass: 1.0,
};
const SLUGGISH: SpringConfig = SpringConfig {
    tension: 280.0,
    friction: 120.0,
    mass: 1.0,
};

#[test]
fn damping_ratios() {
    assert!(BOUNCY.damping_ratio() < 1.0);
    assert!(SLUGGISH.damping_ratio() > 1.0);
    let c = SpringConfig::critical(170.0, 1.0);
    assert!((c.damping_ratio() - 1.0).abs() < 1e-5);
    assert!((c.omega() - 170.0_f32.sqrt()).abs() < 1e-4);
}

#[test]
fn zero_dt_is_identity() {
    let cfg = SpringConfig::critical(170.0, 1.0);
    assert_eq!(step_axis(1.5, -2.0, 0.0, &cfg, 0.0), (1.5, -2.0));
    assert_eq!(step_axis(1.5, -2.0, 0.0, &cfg, -0.1), (1.5, -2.0));
}

#[test]
fn at_target_and_still_stays_put() {
    for cfg in [BOUNCY, SLUGGISH, SpringConfig::critical(170.0, 1.0)] {
        let (x, v) = step_axis(3.0, 0.0, 3.0, &cfg, 0.5);
        assert!((x - 3.0).abs() < 1e-6);
        assert!(v.abs() < 1e-6);
    }
}

#[test]
fn split_steps_match_single_step() {
    for cfg in [BOUNCY, SLUGGISH, SpringConfig::critical(170.0, 1.0)] {
        let (x1, v1) = step_axis(0.0, 0.0, 4.0, &cfg, 0.2);
        let (mut x, mut v) = (0.0, 0.0);
        for _ in 0..20 {
            (x, v) = step_axis(x, v, 4.0, &cfg, 0.01);
        }
        assert!((x - x1).abs() < 1e-3, "x={x} x1={x1}");
        assert!((v - v1).abs() < 1e-2, "v={v} v1={v1}");
    }
}

#[test]
fn critical_spring_from_rest_is_monotonic() {
    let cfg = SpringConfig::critical(170.0, 1.0);
    let (mut x, mut v) = (0.0_f32, 0.0_f32);
    let mut prev_gap = 4.0_f32;
    for _ in 0..240 {
        (x, v) = step_axis(x, v, 4.0, &cfg, 1.0 / 60.0);
        let gap = 4.0 - x;
        assert!(gap >= -1e-5, "overshot: x={x}");
        assert!(gap <= prev_gap + 1e-6);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3);
}

#[test]
fn underdamped_spring_overshoots_but_converges() {
    let (mut x, mut v) = (0.0_f32, 0.0_f32);
    let mut max_x = 0.0_f32;
    for _ in 0..600 {
        (x, v) = step_axis(x, v, 1.0, &BOUNCY, 1.0 / 60.0);
        max_x = max_x.max(x);
    }
    assert!(max_x > 1.0);
    assert!((x - 1.0).abs() < 1e-3);
}

#[test]
fn spring3_reaches_target() {
    let mut s = Spring3::at_rest(Vec3::ZERO, SpringConfig::critical(170.0, 1.0));
    let target = Vec3::new(-4.0, 1.5, 0.0);
    for _ in 0..300 {
        s.step(target, 1.0 / 60.0);
    }
    assert!(s.position.distance(target) < 1e-3);
    assert!(s.velocity.length() < 1e-2);
}
