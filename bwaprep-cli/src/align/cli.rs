use clap::{Arg, Command, arg};

pub use bwaprep_align::consts::*;

pub fn create_aln_cli() -> Command {
    Command::new(ALN_CMD)
        .author("Databio")
        .about("Build a `bwa aln` command for one FASTQ file.")
        .arg(Arg::new("fastq").help("FASTQ file to align."))
        .arg(Arg::new("index").help("Prefix of the bwa index."))
        .arg(arg!(-t --threads <threads> "Number of threads for bwa (default: 4)."))
        .arg(arg!(-o --output <output> "Output .sai file (default: derived from the FASTQ name)."))
        .arg(arg!(--bwa <bwa> "bwa executable (default: bwa)."))
}

pub fn create_samse_cli() -> Command {
    Command::new(SAMSE_CMD)
        .author("Databio")
        .about("Build a `bwa samse` command for single-end reads.")
        .arg(Arg::new("fastq").help("FASTQ file that was aligned."))
        .arg(Arg::new("aln").help(".sai file produced by `bwa aln`."))
        .arg(Arg::new("index").help("Prefix of the bwa index."))
        .arg(arg!(-o --output <output> "Output SAM file (default: derived from the FASTQ name)."))
        .arg(arg!(--bwa <bwa> "bwa executable (default: bwa)."))
}

pub fn create_sampe_cli() -> Command {
    Command::new(SAMPE_CMD)
        .author("Databio")
        .about("Build a `bwa sampe` command for paired-end reads.")
        .arg(Arg::new("fastq1").help("FASTQ file for read 1."))
        .arg(Arg::new("fastq2").help("FASTQ file for read 2."))
        .arg(Arg::new("aln1").help(".sai file for read 1."))
        .arg(Arg::new("aln2").help(".sai file for read 2."))
        .arg(Arg::new("index").help("Prefix of the bwa index."))
        .arg(arg!(-o --output <output> "Output SAM file (default: derived from the read 1 name)."))
        .arg(arg!(--bwa <bwa> "bwa executable (default: bwa)."))
}
