//! Equirectangular pixel → direction → cube face and UV.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

use crate::CubeFace;

/// A point on a cube face with `u` and `v` nominally in \[-1, 1\].
///
/// Values may overshoot slightly through floating-point error; they are
/// only clamped when converted to a texel by [`FaceUv::to_texel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceUv {
    /// Which cube face the direction lands on.
    pub face: CubeFace,
    /// Horizontal face coordinate.
    pub u: f64,
    /// Vertical face coordinate.
    pub v: f64,
}

impl FaceUv {
    /// Nearest texel on a `face_width` × `face_height` image.
    ///
    /// Truncates toward zero, then clamps into the face, so the result
    /// is always a valid index for non-empty faces.
    #[must_use]
    pub fn to_texel(&self, face_width: u32, face_height: u32) -> (u32, u32) {
        (
            to_index(self.u, face_width),
            to_index(self.v, face_height),
        )
    }
}

#[inline]
fn to_index(coord: f64, extent: u32) -> u32 {
    // `as` truncates toward zero and saturates (NaN becomes 0).
    let raw = ((coord + 1.0) * f64::from(extent) / 2.0) as i64;
    raw.clamp(0, i64::from(extent.saturating_sub(1))) as u32
}

/// Longitude `theta` in \[0, 2π) and latitude `phi` in \[-π/2, π/2) of an
/// output pixel. Row 0 is the south pole.
#[must_use]
fn pixel_angles(x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
    let theta_step = TAU / f64::from(width);
    let phi_step = PI / f64::from(height);
    (theta_step * f64::from(x), phi_step * f64::from(y) - FRAC_PI_2)
}

/// Unit direction for the given longitude and latitude.
///
/// `theta = 0` on the equator points along +Z; `theta = π/2` along +X.
#[must_use]
fn direction_from_angles(theta: f64, phi: f64) -> DVec3 {
    DVec3::new(phi.cos() * theta.sin(), phi.sin(), phi.cos() * theta.cos())
}

/// Unit direction represented by output pixel `(x, y)`.
#[must_use]
pub fn pixel_direction(x: u32, y: u32, width: u32, height: u32) -> DVec3 {
    let (theta, phi) = pixel_angles(x, y, width, height);
    direction_from_angles(theta, phi)
}

/// Project a direction onto the cube face of its dominant axis.
///
/// X wins ties against Y and Z. Y must strictly beat X but only tie Z.
/// This asymmetry decides which face owns exact edge and corner
/// directions and must stay as is to reproduce reference output.
///
/// The direction should be non-zero; a zero vector yields
/// [`CubeFace::NegX`] with NaN coordinates, which map to texel 0.
#[must_use]
pub fn direction_to_face_uv(dir: DVec3) -> FaceUv {
    let DVec3 { x, y, z } = dir;
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

    let (face, u, v) = if ax >= ay && ax >= az {
        if x > 0.0 {
            (CubeFace::PosX, -z / ax, -y / ax)
        } else {
            (CubeFace::NegX, z / ax, -y / ax)
        }
    } else if ay > ax && ay >= az {
        if y > 0.0 {
            (CubeFace::PosY, x / ay, z / ay)
        } else {
            (CubeFace::NegY, x / ay, -z / ay)
        }
    } else if z > 0.0 {
        (CubeFace::PosZ, x / az, -y / az)
    } else {
        (CubeFace::NegZ, -x / az, -y / az)
    };

    FaceUv { face, u, v }
}
