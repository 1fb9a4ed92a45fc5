mod args;
mod output;
mod seed;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use jview_jndi::JndiService;
use jview_kernel::config::load_config;
use jview_kernel::domain::config::ViewerConfig;
use jview_logger::{LevelFilter, Logger, parse_level};
use jview_naming::EmbeddedRegistry;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ViewerConfig =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _logger = init_logger(&cli, &config)?;
    info!(
        config = ?cli.config,
        factory = %config.naming.factory,
        loader = %config.naming.loader,
        "Configuration loaded"
    );

    let registry = EmbeddedRegistry::new();
    if let Some(path) = cli.seed.as_deref().or(config.registry.seed.as_deref()) {
        let leaves = seed::load_file(&registry, path)?;
        info!(seed = %path.display(), leaves, "Seeded embedded registry");
    }

    let mut service = JndiService::from_config(&registry, &config.naming);

    let mut records = Vec::new();
    if cli.paths.is_empty() {
        records.extend(service.listing(&config.naming.root));
    } else {
        for path in &cli.paths {
            records.extend(service.listing(path));
        }
    }
    service.close();

    output::write_records(&mut std::io::stdout().lock(), cli.format, &records)
        .context("Failed to write listing")
}

fn init_logger(cli: &Cli, config: &ViewerConfig) -> Result<Logger> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { parse_level(&config.logging.level)? };

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .console(true)
        .level(level)
        .json(config.logging.json);
    if let Some(path) = &config.logging.path {
        builder = builder.path(path.clone());
    }

    builder.init().context("Failed to initialize logging")
}
