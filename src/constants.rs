// Web-side tuning: DOM contract, frame pacing and post-processing.
// Scene and animation tuning shared with the frame loop lives in `core::constants`.

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const PART_LABEL_ID: &str = "part-label";
pub const EXPLODE_TOGGLE_ID: &str = "explode-toggle";
pub const NAV_DOT_PREFIX: &str = "nav-dot-";

// Canvas data attributes
pub const MODEL_ATTR: &str = "data-model";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

// Class toggled on the nav dot of the current section
pub const NAV_ACTIVE_CLASS: &str = "active";

// Longest frame step fed to the animation (seconds); avoids a jump after the
// tab was in the background
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Press travel before it counts as an orbit drag; hover picking pauses past it
pub const DRAG_THRESHOLD_PX: f32 = 4.0;

// Lighting (ambient, key directional, fill point)
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const KEY_LIGHT_DIR: [f32; 3] = [10.0, 10.0, 5.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -5.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
pub const SHININESS: f32 = 100.0;

// Hovered parts render in this color
pub const HOVER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Background (studio-like light grey)
pub const CLEAR_COLOR: [f64; 3] = [0.93, 0.94, 0.95];

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.25;
pub const BLOOM_THRESHOLD: f32 = 0.9;
