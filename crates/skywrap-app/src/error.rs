//! Application error types.

use std::path::PathBuf;

use skywrap_config::ConfigError;
use skywrap_projector::{CubeFace, ProjectError};

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A face image could not be opened or decoded.
    #[error("failed to load face {face} from {}: {source}", path.display())]
    FaceLoad {
        face: CubeFace,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The loaded faces or requested size were rejected.
    #[error("projection failed: {0}")]
    Projection(#[from] ProjectError),

    /// The output folder could not be created.
    #[error("failed to create output folder {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The panorama could not be encoded or written.
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
