use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

///
/// Paths to the external programs the builders put at the front of their
/// commands. Useful when `bwa` lives in a module tree or a conda env that is
/// not on the scheduler's `PATH`.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct ToolPaths {
    pub bwa: String,
    pub split: String,
    pub zcat: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        ToolPaths {
            bwa: DEFAULT_BWA.to_string(),
            split: DEFAULT_SPLIT.to_string(),
            zcat: DEFAULT_ZCAT.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct BuilderDefaults {
    pub threads: u32,
    pub number_of_reads: u64,
    pub numeric_suffix: bool,
    pub output_directory: String,
}

impl Default for BuilderDefaults {
    fn default() -> Self {
        BuilderDefaults {
            threads: DEFAULT_THREADS,
            number_of_reads: DEFAULT_NUMBER_OF_READS,
            numeric_suffix: true,
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
        }
    }
}

///
/// Site configuration, read from a TOML file:
///
/// ```toml
/// [tools]
/// bwa = "/opt/bwa-0.7.17/bwa"
///
/// [defaults]
/// threads = 8
/// number_of_reads = 4000000
/// ```
///
/// Every key is optional and falls back to the built-in default.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct BwaPrepConfig {
    pub tools: ToolPaths,
    pub defaults: BuilderDefaults,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TryFrom<&Path> for BwaPrepConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
