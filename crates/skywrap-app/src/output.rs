//! Writing the finished panorama.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::AppError;

/// File name of the panorama for `base_name`, e.g. `equ_sky.png`.
#[must_use]
pub fn output_file_name(base_name: &str) -> String {
    format!("equ_{base_name}.png")
}

/// Write `image` as PNG into `folder`, creating it if needed.
///
/// Returns the path written.
pub fn save_equirect(
    image: &RgbImage,
    folder: &Path,
    base_name: &str,
) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(folder).map_err(|source| AppError::CreateOutputDir {
        path: folder.to_path_buf(),
        source,
    })?;
    let path = folder.join(output_file_name(base_name));
    image.save(&path).map_err(|source| AppError::Save {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
