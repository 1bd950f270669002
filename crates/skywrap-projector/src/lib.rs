//! Cubemap to equirectangular projection.
//!
//! Every output pixel is mapped to a direction on the unit sphere, the
//! direction is projected onto the cube face of its dominant axis, and the
//! nearest texel of that face is copied. Rows are processed in parallel.

mod cube_face;
mod direction;
mod error;
mod face_set;
mod projector;

pub use cube_face::CubeFace;
pub use direction::{FaceUv, direction_to_face_uv, pixel_direction};
pub use error::ProjectError;
pub use face_set::FaceSet;
pub use projector::{locate_texel, project, project_with_progress, sample_pixel};
