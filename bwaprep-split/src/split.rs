use std::path::Path;

use log::debug;

use bwaprep_core::consts::{
    DEFAULT_NUMBER_OF_READS, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_SPLIT, DEFAULT_ZCAT, LINES_PER_READ,
};
use bwaprep_core::utils::{ensure_output_directory, file_name_of, require, require_positive};
use bwaprep_core::{BwaPrepError, CommandResult, Result};

use crate::consts::*;

///
/// Options for chunking a single FASTQ file.
///
/// An empty `prefix` means "use the input's file name followed by a `.`", so
/// `reads.fastq` is cut into `reads.fastq.00`, `reads.fastq.01`, ...
///
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOptions {
    pub fastq: String,
    pub number_of_reads: u64,
    pub prefix: String,
    pub numeric_suffix: bool,
    pub is_gzipped: bool,
    pub split_bin: String,
    pub zcat_bin: String,
    pub output_directory: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            fastq: String::new(),
            number_of_reads: DEFAULT_NUMBER_OF_READS,
            prefix: String::new(),
            numeric_suffix: true,
            is_gzipped: false,
            split_bin: DEFAULT_SPLIT.to_string(),
            zcat_bin: DEFAULT_ZCAT.to_string(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
        }
    }
}

impl SplitOptions {
    pub fn new(fastq: impl Into<String>) -> Self {
        SplitOptions {
            fastq: fastq.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("fastq", &self.fastq)?;
        require("split_bin", &self.split_bin)?;
        require("zcat_bin", &self.zcat_bin)?;
        require("output_directory", &self.output_directory)?;
        require_positive("number_of_reads", self.number_of_reads)?;
        self.line_count()?;
        Ok(())
    }

    /// Lines per chunk handed to `split -l`.
    pub fn line_count(&self) -> Result<u64> {
        self.number_of_reads
            .checked_mul(LINES_PER_READ)
            .ok_or(BwaPrepError::LineCountOverflow(self.number_of_reads))
    }

    ///
    /// The chunk prefix before it is placed in the output directory.
    ///
    /// Compressed input is decompressed on the fly, so a `.gz` left on the prefix
    /// would mislabel the plain-text chunks and is dropped.
    ///
    pub fn file_prefix(&self) -> String {
        let prefix = if self.prefix.trim().is_empty() {
            format!("{}{}", file_name_of(&self.fastq), PREFIX_SEPARATOR)
        } else {
            self.prefix.clone()
        };

        if self.is_gzipped {
            strip_gz_marker(&prefix)
        } else {
            prefix
        }
    }

    /// The prefix split writes its chunks under.
    pub fn chunk_prefix(&self) -> String {
        let prefix = self.file_prefix();

        if self.output_directory == DEFAULT_OUTPUT_DIRECTORY {
            prefix
        } else {
            Path::new(&self.output_directory)
                .join(prefix)
                .to_string_lossy()
                .to_string()
        }
    }

    pub fn build(&self) -> Result<CommandResult> {
        split_fastq(self)
    }
}

/// `out.gz` -> `out.`, `x.fastq.gz.` -> `x.fastq.`; anything else is returned as is.
fn strip_gz_marker(prefix: &str) -> String {
    let base = prefix.strip_suffix(PREFIX_SEPARATOR).unwrap_or(prefix);
    match base.strip_suffix(".gz") {
        Some(stripped) => format!("{}{}", stripped, PREFIX_SEPARATOR),
        None => prefix.to_string(),
    }
}

///
/// Build the command that cuts a FASTQ file into chunks of `number_of_reads`
/// reads.
///
/// Plain input: `<split_bin> -l <n> [-d] <fastq> <prefix>`
///
/// Gzipped input: `<zcat_bin> <fastq> | <split_bin> -l <n> [-d] - <prefix>`
///
/// where `n` is four lines per read. The output directory is created (with its
/// parents) before the command is returned; this is the only side effect.
///
/// # Arguments
/// - opts: the split options, see [`SplitOptions`]
///
pub fn split_fastq(opts: &SplitOptions) -> Result<CommandResult> {
    opts.validate()?;

    ensure_output_directory(Path::new(&opts.output_directory))?;

    let lines = opts.line_count()?;
    let prefix = opts.chunk_prefix();

    let mut split_args = vec![
        opts.split_bin.clone(),
        LINES_FLAG.to_string(),
        lines.to_string(),
    ];
    if opts.numeric_suffix {
        split_args.push(NUMERIC_SUFFIX_FLAG.to_string());
    }

    let command = if opts.is_gzipped {
        split_args.push(STDIN_PATH.to_string());
        split_args.push(prefix.clone());
        format!("{} {} | {}", opts.zcat_bin, opts.fastq, split_args.join(" "))
    } else {
        split_args.push(opts.fastq.clone());
        split_args.push(prefix.clone());
        split_args.join(" ")
    };

    debug!("Built split command: {}", command);

    Ok(CommandResult::new(command, prefix))
}
