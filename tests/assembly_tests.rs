// Host-side tests for the part assembly: explode/assemble trajectories,
// idle spin and connection lines.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod parts {
        include!("../src/core/parts.rs");
    }
}

use crate::core::constants::AUTO_ROTATE_RAD_PER_SEC;
use crate::core::parts::*;
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn distances_to(assembly: &Assembly, targets: &[Vec3]) -> Vec<f32> {
    (0..assembly.len())
        .map(|i| {
            assembly
                .local_position(i)
                .map(|p| p.distance(targets[i]))
                .unwrap_or(f32::INFINITY)
        })
        .collect()
}

#[test]
fn placeholder_has_seven_parts_anchored_on_chassis() {
    let parts = placeholder_assembly();
    assert_eq!(parts.len(), 7);
    assert_eq!(parts[0].name, "Main Chassis");
    assert_eq!(parts[0].rest_position, parts[0].exploded_position);
    for p in &parts[1..] {
        assert_ne!(p.rest_position, p.exploded_position, "{}", p.name);
    }
}

#[test]
fn parts_start_at_rest() {
    let parts = placeholder_assembly();
    let assembly = Assembly::new(parts.clone());
    for (i, spec) in parts.iter().enumerate() {
        assert_eq!(assembly.local_position(i), Some(spec.rest_position));
    }
    assert_eq!(assembly.explode_amount(), 0.0);
    assert_eq!(assembly.local_position(parts.len()), None);
}

#[test]
fn explode_then_assemble_converges_monotonically() {
    let parts = placeholder_assembly();
    let rest: Vec<Vec3> = parts.iter().map(|p| p.rest_position).collect();
    let exploded: Vec<Vec3> = parts.iter().map(|p| p.exploded_position).collect();
    let mut assembly = Assembly::new(parts);

    // Flag on: every part heads out toward its exploded position
    let mut prev = distances_to(&assembly, &exploded);
    for _ in 0..240 {
        assembly.tick(true, DT);
        let now = distances_to(&assembly, &exploded);
        for (i, (a, b)) in prev.iter().zip(&now).enumerate() {
            assert!(b <= &(a + 1e-5), "part {i} moved away: {a} -> {b}");
        }
        prev = now;
    }
    assert!(prev.iter().all(|d| *d < 1e-2), "{prev:?}");
    assert!(assembly.explode_amount() > 0.99);

    // Flag off: every part comes back
    let mut prev = distances_to(&assembly, &rest);
    for _ in 0..240 {
        assembly.tick(false, DT);
        let now = distances_to(&assembly, &rest);
        for (i, (a, b)) in prev.iter().zip(&now).enumerate() {
            assert!(b <= &(a + 1e-5), "part {i} moved away: {a} -> {b}");
        }
        prev = now;
    }
    assert!(prev.iter().all(|d| *d < 1e-2), "{prev:?}");
    assert!(assembly.explode_amount() < 0.01);
}

#[test]
fn flip_mid_flight_never_passes_rest() {
    let parts = placeholder_assembly();
    let mut assembly = Assembly::new(parts.clone());
    for _ in 0..10 {
        assembly.tick(true, DT);
    }
    // Motor housing travels along -x on explode
    let x_rest = parts[1].rest_position.x;
    for _ in 0..300 {
        assembly.tick(false, DT);
        let x = assembly.local_position(1).map_or(0.0, |p| p.x);
        assert!(x <= x_rest + 1e-4, "x={x}");
    }
}

#[test]
fn group_spins_only_while_assembled() {
    let mut assembly = Assembly::new(placeholder_assembly());
    for _ in 0..60 {
        assembly.tick(false, DT);
    }
    let after_second = assembly.rotation_y();
    assert!((after_second - AUTO_ROTATE_RAD_PER_SEC).abs() < 1e-4);

    for _ in 0..60 {
        assembly.tick(true, DT);
    }
    assert_eq!(assembly.rotation_y(), after_second);
    assert!(assembly.exploded());
}

#[test]
fn rotation_wraps() {
    let mut assembly = Assembly::new(placeholder_assembly());
    assembly.tick(false, 100.0);
    let r = assembly.rotation_y();
    assert!((0.0..std::f32::consts::TAU).contains(&r));
}

#[test]
fn world_positions_follow_group_rotation() {
    let mut assembly = Assembly::new(placeholder_assembly());
    // Quarter turn
    let quarter = std::f32::consts::FRAC_PI_2 / AUTO_ROTATE_RAD_PER_SEC;
    assembly.tick(false, quarter);
    // Sensor array rests at +x; a quarter turn about +y carries it to -z
    let w = assembly.world_position(2).unwrap_or(Vec3::ZERO);
    assert!((w - Vec3::new(0.0, 0.5, -1.5)).length() < 1e-3, "{w:?}");
}

#[test]
fn connection_lines_use_3d_distance() {
    let mut assembly = Assembly::new(placeholder_assembly());
    for _ in 0..600 {
        assembly.tick(true, DT);
    }
    let lines = assembly.connection_lines();
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.part_index != 0));

    // Motor housing explodes to (-4, 1.5, 0); chassis stays at the origin
    let motor = lines.iter().find(|l| l.part_index == 1).map(|l| l.length);
    let expected = Vec3::new(-4.0, 1.5, 0.0).length();
    assert!(motor.is_some_and(|d| (d - expected).abs() < 1e-2), "{motor:?}");

    // Gripper right at (2, 0, 4) needs z in the distance
    let gripper = lines.iter().find(|l| l.part_index == 6).map(|l| l.length);
    let expected = Vec3::new(2.0, 0.0, 4.0).length();
    assert!(gripper.is_some_and(|d| (d - expected).abs() < 1e-2), "{gripper:?}");
}

#[test]
fn empty_assembly_is_harmless() {
    let mut assembly = Assembly::new(Vec::new());
    assembly.tick(true, DT);
    assert!(assembly.is_empty());
    assert!(assembly.connection_lines().is_empty());
    assert_eq!(assembly.explode_amount(), 0.0);
}

#[test]
fn shape_metrics() {
    let b = PartShape::Box {
        width: 2.0,
        height: 1.0,
        depth: 3.0,
    };
    assert_eq!(b.kind_id(), 0);
    assert_eq!(b.size_array(), [2.0, 1.0, 3.0]);
    assert!((b.label_height() - 1.5).abs() < 1e-6);

    let s = PartShape::Sphere { radius: 0.4 };
    assert_eq!(s.kind_id(), 2);
    assert_eq!(s.label_height(), 1.0);

    let c = PartShape::Cylinder {
        radius_top: 0.5,
        radius_bottom: 0.8,
        height: 0.5,
    };
    assert_eq!(c.kind_id(), 1);
    // Label rides on the second size entry, the bottom radius
    assert!((c.label_height() - 1.3).abs() < 1e-6);
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("#ffffff"), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_hex_color("#000"), Some([0.0, 0.0, 0.0]));
    assert_eq!(parse_hex_color(" #FF0000 "), Some([1.0, 0.0, 0.0]));
    let c = parse_hex_color("#007BFF");
    assert!(c.is_some_and(|c| (c[2] - 1.0).abs() < 1e-6 && c[0] == 0.0));
    assert_eq!(parse_hex_color("007BFF"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#GGGGGG"), None);
    assert_eq!(parse_hex_color("#ééé"), None);
    // Sign characters are not hex digits
    assert_eq!(parse_hex_color("#+1+2+3"), None);
    assert_eq!(parse_hex_color("#+f+"), None);
}
