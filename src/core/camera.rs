use glam::{Mat4, Vec3};

use super::constants::{
    CAMERA_FOVY_DEG, CAMERA_SMOOTHING, CAMERA_ZFAR, CAMERA_ZNEAR, REFERENCE_FPS, SECTION_COUNT,
};

/// Where the camera sits and what it looks at for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: [f32; 3], look_at: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            look_at: Vec3::from_array(look_at),
        }
    }
}

pub const CAMERA_POSES: [CameraPose; SECTION_COUNT] = [
    CameraPose::new([0.0, 3.0, 10.0], [0.0, 0.0, 0.0]), // landing overview
    CameraPose::new([-3.0, 1.0, 5.0], [-1.5, 0.5, 0.0]), // about: motor housing
    CameraPose::new([3.0, 2.0, 6.0], [1.5, 0.5, 0.0]),  // projects: sensor array
    CameraPose::new([0.0, 4.0, 4.0], [0.0, 1.2, 0.0]),  // skills: control unit
    CameraPose::new([0.0, 3.0, 10.0], [0.0, 0.0, 0.0]), // contact: back to overview
];

/// Pose for a section; unknown indices fall back to the landing pose.
#[inline]
pub fn pose_for_section(section_index: usize) -> CameraPose {
    CAMERA_POSES
        .get(section_index)
        .copied()
        .unwrap_or(CAMERA_POSES[0])
}

/// Per-frame blend factor for exponential smoothing, normalized so that a
/// frame of exactly `1 / REFERENCE_FPS` seconds blends by `factor`.
#[inline]
pub fn smoothing_alpha(factor: f32, dt_sec: f32) -> f32 {
    let factor = factor.clamp(0.0, 1.0);
    if dt_sec <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - factor).powf(dt_sec * REFERENCE_FPS)
}

/// Smoothed camera eye/target that chases the active section pose.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraRig {
    pub fn at_pose(pose: CameraPose) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
        }
    }

    /// Move `alpha` of the way toward `pose`.
    pub fn approach(&mut self, pose: CameraPose, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        self.eye += (pose.position - self.eye) * alpha;
        self.target += (pose.look_at - self.target) * alpha;
    }

    /// Frame update with the default smoothing factor.
    pub fn step(&mut self, pose: CameraPose, dt_sec: f32) {
        self.approach(pose, smoothing_alpha(CAMERA_SMOOTHING, dt_sec));
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::at_pose(CAMERA_POSES[0])
    }
}

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
