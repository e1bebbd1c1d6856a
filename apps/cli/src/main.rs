#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use guidex::domain::config::LoggingSettings;
use guidex::kernel::config::load_settings;
use guidex_logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose {
        settings.logging.level = "debug".to_owned();
    }

    let _logger = init_logger(&settings.logging)?;

    match cli.command {
        Commands::Lookup { guid, ini } => handlers::lookup::lookup(&guid, ini.as_deref()),
        Commands::Scan(args) => {
            handlers::scan::apply(&mut settings, args);
            handlers::scan::scan(&settings)?;
        },
        Commands::Classes(args) => {
            handlers::classes::apply(&mut settings, args.out, args.formats);
            handlers::classes::classes(&settings, args.build)?;
        },
    }

    Ok(())
}

fn init_logger(logging: &LoggingSettings) -> Result<Logger> {
    let level = parse_level(&logging.level)?;
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level).console(true);

    let logger = match &logging.path {
        Some(path) if logging.json => builder.path(path).json().init(),
        Some(path) => builder.path(path).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Ok(logger)
}
