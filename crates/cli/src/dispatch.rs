//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Obtain the shared loader with the `--default` values.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;
use bucketconf_config::shared_loader;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let loader = shared_loader(cli.defaults())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Show { path, format } => commands::show::run(&loader, &path, format, &mut out),
        Commands::Get {
            path,
            key,
            fallback,
        } => commands::get::run(&loader, &path, &key, fallback.as_deref(), &mut out),
        Commands::Source => commands::source::run(&loader, &mut out),
    }
}
