//! Camera helpers
//!
//! - [`interpolation`] - `lerp` and Catmull-Rom evaluation for points
//! - [`follow`] - a camera that trails a moving body

pub mod follow;
pub mod interpolation;

pub use follow::CameraFollow;
pub use interpolation::{catmull_rom, lerp};
