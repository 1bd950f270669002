//! Validated collection of the six cubemap face images.

use image::{Rgb, RgbImage};

use crate::{CubeFace, ProjectError};

/// Six RGB face images addressed by [`CubeFace`].
///
/// Faces may differ in size and need not be square. Every face is
/// guaranteed non-empty, so any in-range texel lookup succeeds.
#[derive(Debug, Clone)]
pub struct FaceSet {
    faces: [RgbImage; 6],
}

impl FaceSet {
    /// Build a face set from images given in canonical
    /// [`CubeFace::ALL`] order: +X, −X, +Y, −Y, +Z, −Z.
    pub fn new(faces: Vec<RgbImage>) -> Result<Self, ProjectError> {
        let count = faces.len();
        let faces: [RgbImage; 6] = faces.try_into().map_err(|_| {
            ProjectError::MalformedFaceSet(format!("expected 6 faces, got {count}"))
        })?;
        for face in CubeFace::ALL {
            let (w, h) = faces[face.index()].dimensions();
            if w == 0 || h == 0 {
                return Err(ProjectError::MalformedFaceSet(format!(
                    "face {face} is empty ({w}x{h})"
                )));
            }
        }
        Ok(Self { faces })
    }

    /// Build a face set by producing the image for each face.
    pub fn from_fn(mut f: impl FnMut(CubeFace) -> RgbImage) -> Result<Self, ProjectError> {
        Self::new(CubeFace::ALL.iter().map(|&face| f(face)).collect())
    }

    /// Image for the given face.
    #[must_use]
    fn face(&self, face: CubeFace) -> &RgbImage {
        &self.faces[face.index()]
    }

    /// `(width, height)` of the given face.
    #[must_use]
    pub fn dimensions(&self, face: CubeFace) -> (u32, u32) {
        self.face(face).dimensions()
    }

    /// Nearest-neighbor texel read. Coordinates must be in range.
    #[must_use]
    pub fn texel(&self, face: CubeFace, px: u32, py: u32) -> Rgb<u8> {
        *self.face(face).get_pixel(px, py)
    }
}
