use clap::{Arg, Command, arg};

pub const SPLIT_CMD: &str = "split";
pub const SPLIT_PAIRED_CMD: &str = "split-paired";

fn shared_split_args(cmd: Command) -> Command {
    cmd.arg(arg!(-n --reads <reads> "Reads per chunk (default: 10000000)."))
        .arg(arg!(--"numeric-suffix" <numeric_suffix> "Use numeric chunk suffixes: true or false (default: true)."))
        .arg(arg!(--"split-bin" <split_bin> "split executable (default: split)."))
        .arg(arg!(--"zcat-bin" <zcat_bin> "zcat executable (default: zcat)."))
        .arg(arg!(--outdir <outdir> "Directory for the chunks, created if missing (default: .)."))
}

pub fn create_split_cli() -> Command {
    let cmd = Command::new(SPLIT_CMD)
        .author("Databio")
        .about("Build a command that cuts a FASTQ file into chunks of a fixed number of reads.")
        .arg(Arg::new("fastq").help("FASTQ file to split."))
        .arg(arg!(-p --prefix <prefix> "Chunk prefix (default: the FASTQ file name followed by `.`)."))
        .arg(arg!(--gzipped <gzipped> "Input is gzip compressed: true or false (default: false)."));

    shared_split_args(cmd)
}

pub fn create_split_paired_cli() -> Command {
    let cmd = Command::new(SPLIT_PAIRED_CMD)
        .author("Databio")
        .about("Build chunking commands for both files of a paired-end run.")
        .arg(Arg::new("fastq1").help("FASTQ file for read 1."))
        .arg(Arg::new("fastq2").help("FASTQ file for read 2."));

    shared_split_args(cmd)
}
