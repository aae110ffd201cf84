//! Builds an icon font and its QML lookup singleton from a manifest of SVGs.

use anyhow::Result;
use iconfont::core::{self, CliArgs, ConfigFile};
use iconfont::logging;

/// Load settings, set up logging and run the pipeline.
fn run_app(cli_args: CliArgs) -> Result<()> {
    let config = ConfigFile::load();
    let configured_filter = config
        .as_ref()
        .ok()
        .and_then(|config| config.as_ref())
        .and_then(|config| config.log_filter.as_deref());
    logging::init(configured_filter);

    let config = config
        .unwrap_or_else(|err| {
            tracing::warn!("Ignoring user settings: {err:#}");
            None
        })
        .unwrap_or_default();

    core::run_app(cli_args, &config)
}

fn main() {
    use clap::Parser;
    let cli_args = CliArgs::parse();
    if let Err(error) = run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
