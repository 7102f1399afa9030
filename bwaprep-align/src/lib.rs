//! # Command builders for the bwa short-read aligner.
//!
//! Each builder validates its options, fills in a default output file derived from
//! the input FASTQ and returns the command line as a [`CommandResult`]. Nothing is
//! executed here.
//!
//! ```
//! use bwaprep_align::{SampeOptions, sampe};
//!
//! let opts = SampeOptions::new("a.fq", "b.fq", "a.sai", "b.sai", "ref");
//! let result = sampe(&opts).unwrap();
//!
//! assert_eq!(result.command, "bwa sampe -f a.sam ref a.sai b.sai a.fq b.fq");
//! assert_eq!(result.output_path, "a.sam");
//! ```
pub mod aln;
pub mod consts;
pub mod sampe;
pub mod samse;

// re-exports
pub use aln::*;
pub use sampe::*;
pub use samse::*;

pub use bwaprep_core::{BwaPrepError, CommandResult, Result};
