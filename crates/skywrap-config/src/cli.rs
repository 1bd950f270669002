//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Convert six cubemap faces into one equirectangular panorama.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "skywrap", about = "Cubemap to equirectangular converter")]
pub struct CliArgs {
    /// Folder containing the face images.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Folder to write the panorama into.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Face file-name prefix (`<base>_pos_x.png`, ...).
    #[arg(long)]
    pub base_name: Option<String>,

    /// Output width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write JSON logs to this directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.input {
            self.conversion.input_folder = dir.clone();
        }
        if let Some(ref dir) = args.output {
            self.conversion.output_folder = dir.clone();
        }
        if let Some(ref name) = args.base_name {
            self.conversion.base_name = name.clone();
        }
        if let Some(w) = args.width {
            self.conversion.output_width = w;
        }
        if let Some(h) = args.height {
            self.conversion.output_height = h;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
