//! # Core models and helpers for bwaprep.
//!
//! Everything the command builders share lives here: the [`CommandResult`] value
//! every builder returns, the error taxonomy, the filename conventions used to
//! derive default outputs and the TOML configuration that lets a user point the
//! builders at non-default binaries.
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use config::*;
pub use errors::*;
pub use models::*;
