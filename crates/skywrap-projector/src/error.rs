//! Projection error types.

/// Errors detected before projection starts. No partial output is produced.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProjectError {
    /// Requested output has a zero dimension.
    #[error("invalid output dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested output width.
        width: u32,
        /// Requested output height.
        height: u32,
    },

    /// The face images do not form a usable cubemap.
    #[error("malformed face set: {0}")]
    MalformedFaceSet(String),
}
