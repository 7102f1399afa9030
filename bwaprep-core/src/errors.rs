use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every command builder.
///
/// Everything except [`BwaPrepError::OutputDirectory`] is a validation error and is
/// raised before any command string is assembled.
#[derive(Error, Debug)]
pub enum BwaPrepError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid value for {name}: {value:?}. It must be a positive integer.")]
    InvalidInteger { name: &'static str, value: String },

    #[error("Invalid value for {name}: {value:?}. It must be either `true` or `false`.")]
    InvalidFlag { name: &'static str, value: String },

    #[error("Line count overflows for {0} reads per chunk")]
    LineCountOverflow(u64),

    #[error("Can't create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BwaPrepError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, BwaPrepError::OutputDirectory { .. })
    }
}

/// Result type alias for bwaprep operations.
pub type Result<T> = std::result::Result<T, BwaPrepError>;
