//! File-based driver around the projector: config resolution, face
//! loading, progress reporting and PNG output.

mod error;
pub mod faces;
pub mod output;
mod progress;

use std::path::PathBuf;

use skywrap_config::{CliArgs, Config, ConfigOrigin, ConversionConfig, default_config_dir};
use skywrap_projector::project_with_progress;
use tracing::info;

pub use error::AppError;
pub use progress::RowProgress;

/// Load `config.ron` (creating it if absent), apply CLI overrides, validate.
///
/// The origin is returned so it can be logged once logging is initialized.
pub fn resolve_config(args: &CliArgs) -> Result<(Config, ConfigOrigin), AppError> {
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let (mut config, origin) = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok((config, origin))
}

/// Run one conversion and return the path of the written panorama.
pub fn convert(conv: &ConversionConfig, progress_step_percent: u32) -> Result<PathBuf, AppError> {
    info!(
        input = %conv.input_folder.display(),
        base_name = %conv.base_name,
        width = conv.output_width,
        height = conv.output_height,
        "starting conversion"
    );
    let faces = faces::load_face_set(&conv.input_folder, &conv.base_name)?;

    let progress = RowProgress::new(conv.output_height, progress_step_percent);
    let panorama = project_with_progress(
        &faces,
        conv.output_width,
        conv.output_height,
        |completed, total| progress.on_row(completed, total),
    )?;

    let path = output::save_equirect(&panorama, &conv.output_folder, &conv.base_name)?;
    info!(path = %path.display(), "Finished rendering {}.png", conv.base_name);
    Ok(path)
}
