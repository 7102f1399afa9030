use anyhow::Result;
use clap::ArgMatches;

use bwaprep_core::BwaPrepConfig;
use bwaprep_core::utils::{parse_flag, parse_positive_int};
use bwaprep_split::{PairedSplitOptions, SplitOptions, split_fastq, split_paired_end_fastq_files};

use crate::align::handlers::string_arg;
use crate::output::{print_paired, print_result};

/// Settings both split subcommands share, resolved against the config file.
struct SharedSplitArgs {
    number_of_reads: u64,
    numeric_suffix: bool,
    split_bin: String,
    zcat_bin: String,
    output_directory: String,
}

fn shared_args(matches: &ArgMatches, config: &BwaPrepConfig) -> Result<SharedSplitArgs> {
    let number_of_reads = match matches.get_one::<String>("reads") {
        Some(reads) => parse_positive_int("number_of_reads", reads)?,
        None => config.defaults.number_of_reads,
    };
    let numeric_suffix = match matches.get_one::<String>("numeric-suffix") {
        Some(flag) => parse_flag("numeric_suffix", flag)?,
        None => config.defaults.numeric_suffix,
    };

    Ok(SharedSplitArgs {
        number_of_reads,
        numeric_suffix,
        split_bin: matches
            .get_one::<String>("split-bin")
            .cloned()
            .unwrap_or_else(|| config.tools.split.clone()),
        zcat_bin: matches
            .get_one::<String>("zcat-bin")
            .cloned()
            .unwrap_or_else(|| config.tools.zcat.clone()),
        output_directory: matches
            .get_one::<String>("outdir")
            .cloned()
            .unwrap_or_else(|| config.defaults.output_directory.clone()),
    })
}

pub fn split_options(matches: &ArgMatches, config: &BwaPrepConfig) -> Result<SplitOptions> {
    let shared = shared_args(matches, config)?;
    let is_gzipped = match matches.get_one::<String>("gzipped") {
        Some(flag) => parse_flag("is_gzipped", flag)?,
        None => false,
    };

    Ok(SplitOptions {
        fastq: string_arg(matches, "fastq"),
        number_of_reads: shared.number_of_reads,
        prefix: string_arg(matches, "prefix"),
        numeric_suffix: shared.numeric_suffix,
        is_gzipped,
        split_bin: shared.split_bin,
        zcat_bin: shared.zcat_bin,
        output_directory: shared.output_directory,
    })
}

pub fn split_paired_options(
    matches: &ArgMatches,
    config: &BwaPrepConfig,
) -> Result<PairedSplitOptions> {
    let shared = shared_args(matches, config)?;

    Ok(PairedSplitOptions {
        fastq1: string_arg(matches, "fastq1"),
        fastq2: string_arg(matches, "fastq2"),
        number_of_reads: shared.number_of_reads,
        numeric_suffix: shared.numeric_suffix,
        split_bin: shared.split_bin,
        zcat_bin: shared.zcat_bin,
        output_directory: shared.output_directory,
    })
}

pub fn run_split(matches: &ArgMatches, config: &BwaPrepConfig, json: bool) -> Result<()> {
    let result = split_fastq(&split_options(matches, config)?)?;
    print_result(&result, json)
}

pub fn run_split_paired(matches: &ArgMatches, config: &BwaPrepConfig, json: bool) -> Result<()> {
    let paired = split_paired_end_fastq_files(&split_paired_options(matches, config)?)?;
    print_paired(&paired, json)
}
