pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod particle;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod state;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use layout::compute_layout;
pub use particle::*;
pub use registry::*;
pub use session::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
