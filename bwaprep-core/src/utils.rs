use std::fs;
use std::path::Path;

use log::info;

use crate::consts::GZ_EXT;
use crate::errors::{BwaPrepError, Result};

///
/// Strip exactly one of the given suffixes from a file name. Suffixes are
/// tried in order, so longer suffixes (`.fastq.gz`) must come before the
/// shorter ones they contain (`.fastq`).
///
/// Returns the name untouched if no suffix matches.
///
pub fn strip_one_suffix<'a>(name: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

///
/// Derive a default output path from an input path by stripping one recognized
/// suffix and appending a new extension.
///
/// # Arguments
/// - input: the input file name, e.g. `sample_R1.fastq.gz`
/// - suffixes: the suffixes to recognize, longest first
/// - ext: the extension to append, without the leading dot
///
pub fn derive_output_path(input: &str, suffixes: &[&str], ext: &str) -> String {
    format!("{}.{}", strip_one_suffix(input, suffixes), ext)
}

/// Whether a path names a gzip compressed file, judged by its `.gz` suffix.
pub fn is_gzipped_path(path: &str) -> bool {
    Path::new(path).extension().and_then(|e| e.to_str()) == Some(GZ_EXT)
}

/// The last component of a path, or the whole string when it has none.
pub fn file_name_of(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Fail with [`BwaPrepError::MissingArgument`] when a required string is empty.
pub fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(BwaPrepError::MissingArgument(name));
    }
    Ok(value)
}

/// Fail with [`BwaPrepError::InvalidInteger`] when a count is zero.
pub fn require_positive<T>(name: &'static str, value: T) -> Result<T>
where
    T: Copy + PartialEq + Default + ToString,
{
    if value == T::default() {
        return Err(BwaPrepError::InvalidInteger {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}

///
/// Parse a positive integer supplied as a string (command line, config file).
///
/// Anything that is not a plain decimal integer greater than zero is a
/// validation error.
///
pub fn parse_positive_int<T>(name: &'static str, value: &str) -> Result<T>
where
    T: std::str::FromStr + Copy + PartialEq + Default + ToString,
{
    let invalid = || BwaPrepError::InvalidInteger {
        name,
        value: value.to_string(),
    };
    let parsed: T = value.trim().parse().map_err(|_| invalid())?;
    if parsed == T::default() {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Parse a boolean flag encoded as the string `true` or `false`.
pub fn parse_flag(name: &'static str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BwaPrepError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

///
/// Make sure a directory exists, creating it and any missing parents.
///
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    info!("Creating output directory {:?}", path);
    fs::create_dir_all(path).map_err(|source| BwaPrepError::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
