use crate::constants::{
    AMBIENT_INTENSITY, CLEAR_COLOR, FILL_LIGHT_INTENSITY, FILL_LIGHT_POS, HOVER_COLOR,
    KEY_LIGHT_DIR, KEY_LIGHT_INTENSITY, SHININESS,
};
use crate::core::{Assembly, Camera, MAX_PARTS};

use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PartPacked {
    /// xyz = group-space center, w = shape kind.
    pub(crate) center_kind: [f32; 4],
    pub(crate) size: [f32; 4],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct AssemblyUniforms {
    /// xyz = eye, w = tan(fovy / 2).
    pub(crate) eye: [f32; 4],
    /// xyz = look-at point, w = aspect.
    pub(crate) look_at: [f32; 4],
    /// group rotation, part count, line alpha, ambient.
    pub(crate) spin: [f32; 4],
    pub(crate) key_light: [f32; 4],
    pub(crate) fill_light: [f32; 4],
    /// rgb = background, w = shininess.
    pub(crate) background: [f32; 4],
    pub(crate) parts: [PartPacked; MAX_PARTS],
}

// Must match `Uniforms` in assembly.wgsl: six vec4 headers plus the part array
const _: () = assert!(std::mem::size_of::<AssemblyUniforms>() == 16 * 6 + 48 * MAX_PARTS);

pub(crate) struct AssemblyResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_rgb(c: [f32; 3]) -> [f32; 3] {
    [srgb_to_linear(c[0]), srgb_to_linear(c[1]), srgb_to_linear(c[2])]
}

impl AssemblyUniforms {
    pub(crate) fn pack(
        camera: &Camera,
        assembly: &Assembly,
        hovered: Option<usize>,
    ) -> Self {
        let mut parts = [PartPacked::default(); MAX_PARTS];
        let count = assembly.len().min(MAX_PARTS);
        for (i, spec) in assembly.specs().iter().take(count).enumerate() {
            let Some(p) = assembly.local_position(i) else {
                continue;
            };
            let rgb = if hovered == Some(i) {
                HOVER_COLOR
            } else {
                linear_rgb(spec.color)
            };
            let s = spec.shape.size_array();
            parts[i] = PartPacked {
                center_kind: [p.x, p.y, p.z, spec.shape.kind_id() as f32],
                size: [s[0], s[1], s[2], 0.0],
                color: [rgb[0], rgb[1], rgb[2], 1.0],
            };
        }
        let explode = assembly.explode_amount();
        let key = glam::Vec3::from_array(KEY_LIGHT_DIR).normalize_or_zero();
        let bg = linear_rgb([
            CLEAR_COLOR[0] as f32,
            CLEAR_COLOR[1] as f32,
            CLEAR_COLOR[2] as f32,
        ]);
        Self {
            eye: [
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                (camera.fovy_radians * 0.5).tan(),
            ],
            look_at: [camera.target.x, camera.target.y, camera.target.z, camera.aspect],
            spin: [
                assembly.rotation_y(),
                count as f32,
                // Lines fade in with the explode
                explode,
                AMBIENT_INTENSITY,
            ],
            key_light: [key.x, key.y, key.z, KEY_LIGHT_INTENSITY],
            fill_light: [
                FILL_LIGHT_POS[0],
                FILL_LIGHT_POS[1],
                FILL_LIGHT_POS[2],
                FILL_LIGHT_INTENSITY,
            ],
            background: [bg[0], bg[1], bg[2], SHININESS],
            parts,
        }
    }
}

pub(crate) fn create_assembly_resources(device: &wgpu::Device) -> AssemblyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("assembly_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::ASSEMBLY_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("assembly_bgl"),
        entries: &[helpers::uniform_entry(0)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("assembly_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        "assembly_pipeline",
        &pl,
        &shader,
        "fs_assembly",
        helpers::HDR_FORMAT,
        None,
    );
    let uniform_buffer =
        helpers::create_uniform_buffer::<AssemblyUniforms>(device, "assembly_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("assembly_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    AssemblyResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
