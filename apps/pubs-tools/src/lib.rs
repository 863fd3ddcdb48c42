//! Shared command line plumbing for the generate-* binaries
//!
//! Every binary runs with no arguments against the default site layout;
//! the flags only override paths.

use std::path::PathBuf;

use clap::Args;
use pubs_core::{PubsConfig, PubsResult};
use tracing_subscriber::EnvFilter;

/// Flags shared by every generator
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Publication sheet (CSV with a header row)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding thumbnail images
    #[arg(long, value_name = "DIR")]
    pub thumbnails: Option<PathBuf>,
}

impl CommonArgs {
    /// Build the run configuration: defaults, then the config file, then flags.
    pub fn load_config(&self) -> PubsResult<PubsConfig> {
        self.load_config_with(|_| {})
    }

    /// Like [`CommonArgs::load_config`], with binary-specific overrides
    /// applied after the shared flags. Validation runs last.
    pub fn load_config_with<F>(&self, overrides: F) -> PubsResult<PubsConfig>
    where
        F: FnOnce(&mut PubsConfig),
    {
        let mut config = match &self.config {
            Some(path) => PubsConfig::load(path)?,
            None => PubsConfig::default(),
        };

        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(dir) = &self.thumbnails {
            config.paths.thumbnail_dir = dir.clone();
        }
        overrides(&mut config);

        config.validate()?;
        Ok(config)
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
