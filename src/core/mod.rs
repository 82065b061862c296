//! Platform-independent page logic: scroll tracking, camera poses, part
//! springs, picking and manifest parsing. Nothing here touches web APIs, so
//! the host-side tests in `tests/` include these files directly.

pub mod camera;
pub mod config;
pub mod constants;
pub mod manifest;
pub mod orbit;
pub mod parts;
pub mod pick;
pub mod scene;
pub mod scroll;
pub mod spring;
pub mod state;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use manifest::*;
pub use orbit::*;
pub use parts::*;
pub use pick::*;
pub use scene::*;
pub use scroll::*;
pub use spring::*;
pub use state::*;

// Shaders bundled as string constants
pub static ASSEMBLY_WGSL: &str = include_str!("../../shaders/assembly.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
