use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{LevelFilter, info};

use bwaprep_core::BwaPrepConfig;

/// Set up env_logger; `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
        .parse_default_env()
        .init();
}

pub fn load_config(matches: &ArgMatches) -> Result<BwaPrepConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => {
            info!("Loading configuration from {}", path);
            BwaPrepConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to load configuration file: {}", path))
        }
        None => Ok(BwaPrepConfig::default()),
    }
}
