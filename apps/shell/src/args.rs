//! Command-line interface of the `jview` binary.

use crate::output::Format;
use clap::Parser;
use std::path::PathBuf;

/// Flattened, read-only view of a naming registry.
#[derive(Debug, Parser)]
#[command(name = "jview")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lists every leaf binding of a naming registry as flat records")]
pub(crate) struct Cli {
    /// Paths to list; defaults to `naming.root` from the configuration
    pub(crate) paths: Vec<String>,

    /// Configuration file (defaults to `jview.*` in the working directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// TOML file describing the registry tree; overrides `registry.seed`
    #[arg(short, long, value_name = "FILE")]
    pub(crate) seed: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    pub(crate) verbose: bool,
}
