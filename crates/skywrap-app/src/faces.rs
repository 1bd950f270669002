//! Loading the six face images from disk.

use std::path::{Path, PathBuf};

use skywrap_projector::{CubeFace, FaceSet};
use tracing::debug;

use crate::AppError;

/// File name of one face, e.g. `sky_pos_x.png`.
#[must_use]
pub fn face_file_name(base_name: &str, face: CubeFace) -> String {
    format!("{base_name}_{}.png", face.tag())
}

/// Path of one face inside `folder`.
#[must_use]
pub fn face_path(folder: &Path, base_name: &str, face: CubeFace) -> PathBuf {
    folder.join(face_file_name(base_name, face))
}

/// Load and decode all six faces as 8-bit RGB.
///
/// Alpha and higher bit depths are discarded.
pub fn load_face_set(folder: &Path, base_name: &str) -> Result<FaceSet, AppError> {
    let mut images = Vec::with_capacity(CubeFace::ALL.len());
    for face in CubeFace::ALL {
        let path = face_path(folder, base_name, face);
        let image = image::open(&path)
            .map_err(|source| AppError::FaceLoad {
                face,
                path: path.clone(),
                source,
            })?
            .into_rgb8();
        debug!(
            %face,
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded face"
        );
        images.push(image);
    }
    Ok(FaceSet::new(images)?)
}
