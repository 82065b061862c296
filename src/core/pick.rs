use glam::{Vec2, Vec3, Vec4};

use super::camera::Camera;
use super::parts::PartShape;

/// Nearest non-negative hit distance of a ray against a sphere.
///
/// `ray_dir` must be normalized.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Origin inside the sphere: report the exit point.
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// World-space ray through pixel (`sx`, `sy`) of a `width` × `height` viewport.
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(camera: &Camera, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

/// Project a world point to pixel coordinates; `None` if behind the camera.
pub fn world_to_screen(camera: &Camera, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip = camera.view_projection() * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}

/// Nearest non-negative hit distance of a ray against an axis-aligned box
/// centered on the origin with the given half extents.
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, half: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (ray_origin[axis], ray_dir[axis], half[axis]);
        if d.abs() < 1e-8 {
            if o.abs() > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }
    if t_max < t_min || t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Nearest non-negative hit distance of a ray against a capped cone frustum
/// along +Y, centered on the origin, `radius_top` at +height/2.
pub fn ray_frustum(
    ray_origin: Vec3,
    ray_dir: Vec3,
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
) -> Option<f32> {
    let half = 0.5 * height;
    // r(y) = r0 + k * y
    let k = (radius_top - radius_bottom) / height.max(f32::EPSILON);
    let r0 = 0.5 * (radius_top + radius_bottom);
    let (o, d) = (ray_origin, ray_dir);

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    // Lateral surface: x^2 + z^2 = (r0 + k y)^2
    let ro_y = r0 + k * o.y;
    let a = d.x * d.x + d.z * d.z - k * k * d.y * d.y;
    let b = 2.0 * (o.x * d.x + o.z * d.z - k * ro_y * d.y);
    let c = o.x * o.x + o.z * o.z - ro_y * ro_y;
    let on_side = |t: f32| {
        let y = o.y + t * d.y;
        y.abs() <= half && r0 + k * y >= 0.0
    };
    if a.abs() > 1e-8 {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            for t in [(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)] {
                if on_side(t) {
                    consider(t);
                }
            }
        }
    } else if b.abs() > 1e-8 {
        let t = -c / b;
        if on_side(t) {
            consider(t);
        }
    }

    // End caps
    if d.y.abs() > 1e-8 {
        for (y, r) in [(half, radius_top), (-half, radius_bottom)] {
            let t = (y - o.y) / d.y;
            let px = o.x + t * d.x;
            let pz = o.z + t * d.z;
            if px * px + pz * pz <= r * r {
                consider(t);
            }
        }
    }
    best
}

/// Hit distance of a ray against a part shape centered on the origin of its
/// local frame.
pub fn ray_shape(ray_origin: Vec3, ray_dir: Vec3, shape: &PartShape) -> Option<f32> {
    match *shape {
        PartShape::Box {
            width,
            height,
            depth,
        } => ray_box(ray_origin, ray_dir, 0.5 * Vec3::new(width, height, depth)),
        PartShape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => ray_frustum(ray_origin, ray_dir, radius_top, radius_bottom, height),
        PartShape::Sphere { radius } => ray_sphere(ray_origin, ray_dir, Vec3::ZERO, radius),
    }
}

/// Index of the closest part hit by the ray, if any.
///
/// The ray and part centers share one frame; shapes are axis-aligned in it.
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, parts: &[(Vec3, PartShape)]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, shape)) in parts.iter().enumerate() {
        if let Some(t) = ray_shape(ray_origin - *center, ray_dir, shape) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
