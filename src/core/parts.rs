use glam::{Quat, Vec3};

use super::constants::{
    AUTO_ROTATE_RAD_PER_SEC, LABEL_HEIGHT_DEFAULT, LABEL_HEIGHT_PAD, PART_SPRING_MASS,
    PART_SPRING_TENSION,
};
use super::spring::{Spring3, SpringConfig};

/// Primitive geometry of a part, sized in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartShape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
}

impl PartShape {
    /// Shader-side shape id.
    pub fn kind_id(&self) -> u32 {
        match self {
            PartShape::Box { .. } => 0,
            PartShape::Cylinder { .. } => 1,
            PartShape::Sphere { .. } => 2,
        }
    }

    pub fn size_array(&self) -> [f32; 3] {
        match *self {
            PartShape::Box {
                width,
                height,
                depth,
            } => [width, height, depth],
            PartShape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => [radius_top, radius_bottom, height],
            PartShape::Sphere { radius } => [radius, 0.0, 0.0],
        }
    }

    /// Height above the part center at which its name label floats.
    pub fn label_height(&self) -> f32 {
        match *self {
            PartShape::Box { height, .. } => height + LABEL_HEIGHT_PAD,
            // Second size entry, which for a cylinder is the bottom radius
            PartShape::Cylinder { radius_bottom, .. } => radius_bottom + LABEL_HEIGHT_PAD,
            PartShape::Sphere { .. } => LABEL_HEIGHT_DEFAULT,
        }
    }
}

/// Static description of one assembly part.
#[derive(Clone, Debug, PartialEq)]
pub struct PartSpec {
    pub name: String,
    pub shape: PartShape,
    pub rest_position: Vec3,
    pub exploded_position: Vec3,
    pub color: [f32; 3],
}

impl PartSpec {
    pub fn target(&self, exploded: bool) -> Vec3 {
        if exploded {
            self.exploded_position
        } else {
            self.rest_position
        }
    }
}

/// Parse `#RRGGBB` or `#RGB` into linear-ish \[0, 1\] RGB.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        3 => {
            let expand = |i: usize| {
                let c = &hex[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            Some([expand(0)?, expand(1)?, expand(2)?])
        }
        _ => None,
    }
}

fn part(name: &str, shape: PartShape, rest: [f32; 3], exploded: [f32; 3], hex: &str) -> PartSpec {
    PartSpec {
        name: name.to_string(),
        shape,
        rest_position: Vec3::from_array(rest),
        exploded_position: Vec3::from_array(exploded),
        color: parse_hex_color(hex).unwrap_or([1.0, 1.0, 1.0]),
    }
}

/// Built-in geometry used when no model is configured or loading fails.
pub fn placeholder_assembly() -> Vec<PartSpec> {
    vec![
        part(
            "Main Chassis",
            PartShape::Box {
                width: 2.0,
                height: 1.0,
                depth: 3.0,
            },
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            "#007BFF",
        ),
        part(
            "Motor Housing",
            PartShape::Cylinder {
                radius_top: 0.5,
                radius_bottom: 0.8,
                height: 0.5,
            },
            [-1.5, 0.5, 0.0],
            [-4.0, 1.5, 0.0],
            "#FD7E14",
        ),
        part(
            "Sensor Array",
            PartShape::Sphere { radius: 0.4 },
            [1.5, 0.5, 0.0],
            [4.0, 1.5, 0.0],
            "#28A745",
        ),
        part(
            "Control Unit",
            PartShape::Box {
                width: 1.0,
                height: 0.4,
                depth: 1.0,
            },
            [0.0, 1.2, 0.0],
            [0.0, 3.0, 0.0],
            "#6F42C1",
        ),
        part(
            "Power Core",
            PartShape::Cylinder {
                radius_top: 0.6,
                radius_bottom: 0.4,
                height: 0.6,
            },
            [0.0, -0.8, 0.0],
            [0.0, -2.5, 0.0],
            "#DC3545",
        ),
        part(
            "Gripper Left",
            PartShape::Box {
                width: 0.3,
                height: 0.3,
                depth: 0.8,
            },
            [-0.7, 0.0, 1.8],
            [-2.0, 0.0, 4.0],
            "#17A2B8",
        ),
        part(
            "Gripper Right",
            PartShape::Box {
                width: 0.3,
                height: 0.3,
                depth: 0.8,
            },
            [0.7, 0.0, 1.8],
            [2.0, 0.0, 4.0],
            "#17A2B8",
        ),
    ]
}

/// Segment from the anchor part to another part in exploded view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionLine {
    pub part_index: usize,
    pub from: Vec3,
    pub to: Vec3,
    /// Full 3D Euclidean length.
    pub length: f32,
}

/// Animated state of every part plus the group's idle spin.
#[derive(Clone, Debug)]
pub struct Assembly {
    specs: Vec<PartSpec>,
    springs: Vec<Spring3>,
    exploded: bool,
    rotation_y: f32,
}

impl Assembly {
    pub fn new(specs: Vec<PartSpec>) -> Self {
        let config = SpringConfig::critical(PART_SPRING_TENSION, PART_SPRING_MASS);
        let springs = specs
            .iter()
            .map(|s| Spring3::at_rest(s.rest_position, config))
            .collect();
        Self {
            specs,
            springs,
            exploded: false,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[PartSpec] {
        &self.specs
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// One frame: springs chase the active targets, the group spins while
    /// assembled.
    pub fn tick(&mut self, exploded: bool, dt_sec: f32) {
        self.exploded = exploded;
        let dt = dt_sec.max(0.0);
        for (spring, spec) in self.springs.iter_mut().zip(&self.specs) {
            spring.step(spec.target(exploded), dt);
        }
        if !exploded {
            self.rotation_y = (self.rotation_y + AUTO_ROTATE_RAD_PER_SEC * dt)
                .rem_euclid(std::f32::consts::TAU);
        }
    }

    /// Displayed position of part `index` in group space.
    pub fn local_position(&self, index: usize) -> Option<Vec3> {
        self.springs.get(index).map(|s| s.position)
    }

    pub fn group_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_y)
    }

    /// Displayed position of part `index` in world space.
    pub fn world_position(&self, index: usize) -> Option<Vec3> {
        let rot = self.group_rotation();
        self.local_position(index).map(|p| rot * p)
    }

    pub fn world_positions(&self) -> Vec<Vec3> {
        let rot = self.group_rotation();
        self.springs.iter().map(|s| rot * s.position).collect()
    }

    /// How far the assembly has come apart, 0 assembled … 1 fully exploded.
    pub fn explode_amount(&self) -> f32 {
        let mut sum = 0.0;
        let mut n = 0usize;
        for (spring, spec) in self.springs.iter().zip(&self.specs) {
            let span = spec.exploded_position - spec.rest_position;
            let len2 = span.length_squared();
            if len2 <= f32::EPSILON {
                continue;
            }
            sum += ((spring.position - spec.rest_position).dot(span) / len2).clamp(0.0, 1.0);
            n += 1;
        }
        if n == 0 {
            return 0.0;
        }
        sum / n as f32
    }

    /// Lines from the anchor part (index 0) to every other part, in world
    /// space.
    pub fn connection_lines(&self) -> Vec<ConnectionLine> {
        let positions = self.world_positions();
        let Some(&anchor) = positions.first() else {
            return Vec::new();
        };
        positions
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &p)| ConnectionLine {
                part_index: i,
                from: anchor,
                to: p,
                length: anchor.distance(p),
            })
            .collect()
    }
}
