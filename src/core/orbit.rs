use glam::Vec3;

use super::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PITCH_LIMIT, ORBIT_ROTATE_PER_PX,
    ORBIT_ZOOM_PER_WHEEL,
};

/// User orbit/zoom offsets layered over the scroll-driven camera pose.
///
/// Panning is not supported; the orbit always pivots on the pose's look-at
/// target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        }
    }
}

impl OrbitControls {
    /// Apply a pointer drag of `dx`, `dy` pixels.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_ROTATE_PER_PX;
        self.pitch = (self.pitch + dy * ORBIT_ROTATE_PER_PX)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Apply a wheel delta; positive zooms out.
    ///
    /// `base_distance` is the current pose's eye-to-target distance; the
    /// factor stays where the zoomed distance is within
    /// \[ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE\].
    pub fn zoom_by_wheel(&mut self, delta_y: f32, base_distance: f32) {
        if !delta_y.is_finite() || !base_distance.is_finite() {
            return;
        }
        let base = base_distance.max(f32::EPSILON);
        let scale = (delta_y * ORBIT_ZOOM_PER_WHEEL).exp();
        self.zoom = (self.zoom * scale).clamp(ORBIT_MIN_DISTANCE / base, ORBIT_MAX_DISTANCE / base);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Eye position after orbiting `eye` around `target`.
    ///
    /// The resulting distance to `target` is always within
    /// \[ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE\].
    pub fn apply(&self, eye: Vec3, target: Vec3) -> Vec3 {
        let offset = eye - target;
        let base_dist = offset.length();
        let (base_yaw, base_pitch) = if base_dist > f32::EPSILON {
            let dir = offset / base_dist;
            (dir.x.atan2(dir.z), dir.y.clamp(-1.0, 1.0).asin())
        } else {
            (0.0, 0.0)
        };
        let yaw = base_yaw + self.yaw;
        let pitch = (base_pitch + self.pitch).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        let dist = (base_dist * self.zoom).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        target + Vec3::new(sy * cp, sp, cy * cp) * dist
    }
}
