//! Row-parallel cubemap → equirectangular projection.

use std::sync::atomic::{AtomicU32, Ordering};

use image::{Rgb, RgbImage};
use rayon::prelude::*;
use tracing::debug;

use crate::direction::{direction_to_face_uv, pixel_direction};
use crate::{CubeFace, FaceSet, ProjectError};

/// Face and texel that output pixel `(x, y)` samples.
///
/// Pure function of its arguments; the texel is always inside the face.
#[must_use]
pub fn locate_texel(
    faces: &FaceSet,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> (CubeFace, u32, u32) {
    let fuv = direction_to_face_uv(pixel_direction(x, y, width, height));
    let (face_w, face_h) = faces.dimensions(fuv.face);
    let (px, py) = fuv.to_texel(face_w, face_h);
    (fuv.face, px, py)
}

/// Color of output pixel `(x, y)`.
#[must_use]
pub fn sample_pixel(faces: &FaceSet, x: u32, y: u32, width: u32, height: u32) -> Rgb<u8> {
    let (face, px, py) = locate_texel(faces, x, y, width, height);
    faces.texel(face, px, py)
}

/// Project a cubemap into a `width` × `height` equirectangular image.
pub fn project(faces: &FaceSet, width: u32, height: u32) -> Result<RgbImage, ProjectError> {
    project_with_progress(faces, width, height, |_, _| {})
}

/// Like [`project`], calling `on_row(completed, total)` after each output row.
///
/// Rows are filled in parallel, so `on_row` may be invoked from several
/// threads at once. Each value of `completed` in `1..=total` is passed
/// exactly once.
pub fn project_with_progress<F>(
    faces: &FaceSet,
    width: u32,
    height: u32,
    on_row: F,
) -> Result<RgbImage, ProjectError>
where
    F: Fn(u32, u32) + Sync,
{
    if width == 0 || height == 0 {
        return Err(ProjectError::InvalidDimensions { width, height });
    }
    debug!(width, height, "projecting cubemap");

    let mut output = RgbImage::new(width, height);
    let row_len = width as usize * 3;
    let completed = AtomicU32::new(0);

    (*output)
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let color = sample_pixel(faces, x as u32, y, width, height);
                pixel.copy_from_slice(&color.0);
            }
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            on_row(done, height);
        });

    debug!(rows = height, "projection finished");
    Ok(output)
}
