// Scene and animation tuning constants, shared by the frame loop, input
// handlers and host-side tests. Rates tuned per 60 Hz frame are converted to
// per-second values for the variable-dt frame loop.

// Sections
pub const SECTION_COUNT: usize = 5;

// Reference frame rate used to normalize per-frame factors
pub const REFERENCE_FPS: f32 = 60.0;

// Camera smoothing: fraction of the remaining distance covered per reference frame
pub const CAMERA_SMOOTHING: f32 = 0.05;

// Perspective camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;
pub const ORBIT_ROTATE_PER_PX: f32 = 0.005; // radians per dragged pixel
pub const ORBIT_ZOOM_PER_WHEEL: f32 = 0.001; // log-scale per wheel delta unit
pub const ORBIT_PITCH_LIMIT: f32 = 1.45; // ~83 degrees, keeps clear of the poles

// Assembly idle spin (0.005 rad per reference frame)
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.005 * REFERENCE_FPS;

// Part spring (critically damped, so trajectories from rest never overshoot)
pub const PART_SPRING_TENSION: f32 = 170.0;
pub const PART_SPRING_MASS: f32 = 1.0;

// Picking and labels
pub const LABEL_HEIGHT_PAD: f32 = 0.5;
pub const LABEL_HEIGHT_DEFAULT: f32 = 1.0;

// Upper bound on parts; matches the uniform array in the assembly shader
pub const MAX_PARTS: usize = 8;
