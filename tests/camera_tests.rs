// Host-side tests for section camera poses and smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use crate::core::camera::*;
use glam::Vec3;

#[test]
fn landing_pose_at_scroll_top() {
    let pose = pose_for_section(0);
    assert_eq!(pose.position, Vec3::new(0.0, 3.0, 10.0));
    assert_eq!(pose.look_at, Vec3::ZERO);
}

#[test]
fn projects_pose_for_index_two() {
    let pose = pose_for_section(2);
    assert_eq!(pose, CAMERA_POSES[2]);
    assert_eq!(pose.position, Vec3::new(3.0, 2.0, 6.0));
    assert_eq!(pose.look_at, Vec3::new(1.5, 0.5, 0.0));
}

#[test]
fn out_of_range_index_falls_back_to_landing() {
    assert_eq!(pose_for_section(7), CAMERA_POSES[0]);
    assert_eq!(pose_for_section(usize::MAX), CAMERA_POSES[0]);
}

#[test]
fn every_section_has_a_pose() {
    assert_eq!(CAMERA_POSES.len(), 5);
    for pose in CAMERA_POSES {
        assert!(pose.position.distance(pose.look_at) > 1.0);
    }
}

#[test]
fn smoothing_alpha_matches_factor_at_reference_rate() {
    let a = smoothing_alpha(0.05, 1.0 / 60.0);
    assert!((a - 0.05).abs() < 1e-5, "a={a}");
    assert_eq!(smoothing_alpha(0.05, 0.0), 0.0);
    assert_eq!(smoothing_alpha(0.05, -1.0), 0.0);
}

#[test]
fn smoothing_is_frame_rate_independent() {
    let pose = pose_for_section(1);
    let mut at_60 = CameraRig::default();
    let mut at_120 = CameraRig::default();
    for _ in 0..60 {
        at_60.step(pose, 1.0 / 60.0);
    }
    for _ in 0..120 {
        at_120.step(pose, 1.0 / 120.0);
    }
    assert!(at_60.eye.distance(at_120.eye) < 1e-3);
    assert!(at_60.target.distance(at_120.target) < 1e-3);
}

#[test]
fn rig_converges_without_snapping() {
    let pose = pose_for_section(3);
    let mut rig = CameraRig::default();
    let start = rig.eye.distance(pose.position);

    rig.step(pose, 1.0 / 60.0);
    let after_one = rig.eye.distance(pose.position);
    assert!(after_one < start);
    // One frame covers only the smoothing fraction
    assert!((start - after_one) / start < 0.051);

    let mut prev = after_one;
    for _ in 0..600 {
        rig.step(pose, 1.0 / 60.0);
        let d = rig.eye.distance(pose.position);
        assert!(d <= prev + 1e-6);
        prev = d;
    }
    assert!(prev < 1e-3);
    assert!(rig.target.distance(pose.look_at) < 1e-3);
}

#[test]
fn approach_single_step_formula() {
    let mut rig = CameraRig::at_pose(CameraPose::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]));
    rig.approach(CameraPose::new([10.0, 0.0, 0.0], [0.0, 4.0, 0.0]), 0.05);
    assert!((rig.eye.x - 0.5).abs() < 1e-6);
    assert!((rig.target.y - 0.2).abs() < 1e-6);
}

#[test]
fn camera_projects_look_at_to_screen_center() {
    let cam = Camera::looking_at(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, 16.0 / 9.0);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn camera_rejects_degenerate_aspect() {
    let cam = Camera::looking_at(Vec3::Z, Vec3::ZERO, 0.0);
    assert_eq!(cam.aspect, 1.0);
    let cam = Camera::looking_at(Vec3::Z, Vec3::ZERO, f32::NAN);
    assert_eq!(cam.aspect, 1.0);
}
