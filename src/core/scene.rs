use glam::Vec3;

use super::camera::{pose_for_section, Camera, CameraRig};
use super::orbit::OrbitControls;
use super::parts::{Assembly, PartShape, PartSpec};
use super::pick::{pick_nearest, screen_to_world_ray, world_to_screen};
use super::state::PageState;

/// Everything that animates: the camera rig, the user's orbit offsets and
/// the assembly parts.
pub struct Scene {
    pub assembly: Assembly,
    pub rig: CameraRig,
    pub orbit: OrbitControls,
}

impl Scene {
    pub fn new(parts: Vec<PartSpec>) -> Self {
        Self {
            assembly: Assembly::new(parts),
            rig: CameraRig::default(),
            orbit: OrbitControls::default(),
        }
    }

    /// The per-frame tick: camera chases the section pose, parts chase their
    /// exploded or rest targets.
    pub fn tick(&mut self, page: &PageState, dt_sec: f32) {
        let pose = pose_for_section(page.scroll.section_index);
        self.rig.step(pose, dt_sec);
        self.assembly.tick(page.exploded, dt_sec);
    }

    /// Zoom the orbit relative to the current pose distance.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let base = self.rig.eye.distance(self.rig.target);
        self.orbit.zoom_by_wheel(delta_y, base);
    }

    /// Render camera with orbit offsets applied.
    pub fn camera(&self, aspect: f32) -> Camera {
        let eye = self.orbit.apply(self.rig.eye, self.rig.target);
        Camera::looking_at(eye, self.rig.target, aspect)
    }

    /// Part under pixel (`sx`, `sy`) of a `width` × `height` viewport.
    pub fn pick(&self, sx: f32, sy: f32, width: f32, height: f32) -> Option<usize> {
        let camera = self.camera(width / height.max(1.0));
        let (ro, rd) = screen_to_world_ray(&camera, sx, sy, width, height);
        // Parts are axis-aligned in group space
        let inv = self.assembly.group_rotation().inverse();
        let parts: Vec<(Vec3, PartShape)> = (0..self.assembly.len())
            .filter_map(|i| self.assembly.local_position(i))
            .zip(self.assembly.specs().iter().map(|s| s.shape))
            .collect();
        pick_nearest(inv * ro, inv * rd, &parts)
    }

    /// Pixel position of the label anchor above part `index`.
    pub fn label_anchor(&self, index: usize, width: f32, height: f32) -> Option<(f32, f32)> {
        let spec = self.assembly.specs().get(index)?;
        let world = self.assembly.world_position(index)? + Vec3::Y * spec.shape.label_height();
        let camera = self.camera(width / height.max(1.0));
        world_to_screen(&camera, world, width, height).map(|p| (p.x, p.y))
    }

    /// Label text for part `index`; while exploded it also reports the
    /// distance to the chassis.
    pub fn hover_label(&self, index: usize) -> Option<String> {
        let spec = self.assembly.specs().get(index)?;
        if !self.assembly.exploded() {
            return Some(spec.name.clone());
        }
        let line = self
            .assembly
            .connection_lines()
            .into_iter()
            .find(|l| l.part_index == index);
        Some(match line {
            Some(l) => format!("{} ({:.2} from chassis)", spec.name, l.length),
            None => spec.name.clone(),
        })
    }
}
