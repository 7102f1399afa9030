//! # FASTQ chunking commands.
//!
//! Large FASTQ files are usually cut into fixed-size chunks so each chunk can be
//! aligned as its own job. This crate builds the `split` (or `zcat | split`)
//! command that does the cutting. The output directory is created up front, but
//! the command itself is only returned, never run.
//!
pub mod consts;
pub mod paired;
pub mod split;

// re-exports
pub use paired::*;
pub use split::*;

pub use bwaprep_core::{BwaPrepError, CommandResult, Result};
