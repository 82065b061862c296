// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn five_sections() {
    assert_eq!(SECTION_COUNT, 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_smoothing_is_in_spec_range() {
    assert!((0.03..=0.05).contains(&CAMERA_SMOOTHING));
    assert!(REFERENCE_FPS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_limits_are_ordered() {
    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_MAX_DISTANCE > ORBIT_MIN_DISTANCE);
    assert!(ORBIT_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(CAMERA_ZNEAR < ORBIT_MIN_DISTANCE);
    assert!(CAMERA_ZFAR > ORBIT_MAX_DISTANCE);
}

#[test]
fn auto_rotate_matches_per_frame_rate() {
    let per_frame = AUTO_ROTATE_RAD_PER_SEC / REFERENCE_FPS;
    assert!((per_frame - 0.005).abs() < 1e-7);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_sane() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 1.0);
    assert!(DRAG_THRESHOLD_PX > 0.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD <= 1.0);
    assert!(BLOOM_STRENGTH >= 0.0);
    assert!(MAX_PARTS >= 7, "placeholder assembly must fit");
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        LOADING_OVERLAY_ID,
        PART_LABEL_ID,
        EXPLODE_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(MODEL_ATTR.starts_with("data-"));
    assert!(LOG_LEVEL_ATTR.starts_with("data-"));
}
