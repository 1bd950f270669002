//! The `skywrap` binary: converts a cubemap folder into one equirectangular PNG.

use clap::Parser;
use skywrap_config::CliArgs;
use skywrap_log::init_logging;

fn main() {
    let args = CliArgs::parse();

    let (config, origin) = match skywrap_app::resolve_config(&args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_logging(args.log_dir.as_deref(), Some(&config));
    tracing::info!("{origin}");

    if let Err(e) = skywrap_app::convert(&config.conversion, config.debug.progress_step_percent) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
