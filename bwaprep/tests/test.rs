#![cfg(all(feature = "core", feature = "align", feature = "split"))]

use bwaprep::align::{AlnOptions, SampeOptions, SamseOptions, aln, sampe, samse};
use bwaprep::core::{BwaPrepConfig, BwaPrepError, CommandResult};
use bwaprep::split::{PairedSplitOptions, SplitOptions, split_fastq, split_paired_end_fastq_files};

use pretty_assertions::assert_eq;
use rstest::*;

#[fixture]
fn index() -> &'static str {
    "refs/hg38.fa"
}

#[rstest]
fn test_paired_end_workflow(index: &str) {
    let aln1 = aln(&AlnOptions::new("lane1_R1.fastq.gz", index)).unwrap();
    let aln2 = aln(&AlnOptions::new("lane1_R2.fastq.gz", index)).unwrap();

    let pe = sampe(&SampeOptions::new(
        "lane1_R1.fastq.gz",
        "lane1_R2.fastq.gz",
        aln1.output_path.as_str(),
        aln2.output_path.as_str(),
        index,
    ))
    .unwrap();

    assert_eq!(aln1.output_path, "lane1_R1.sai");
    assert_eq!(aln2.output_path, "lane1_R2.sai");
    assert_eq!(
        pe.command,
        "bwa sampe -f lane1_R1.sam refs/hg38.fa lane1_R1.sai lane1_R2.sai lane1_R1.fastq.gz lane1_R2.fastq.gz"
    );
}

#[rstest]
fn test_single_end_workflow(index: &str) {
    let sai = aln(&AlnOptions::new("sample.fq", index)).unwrap();
    let sam = samse(&SamseOptions::new("sample.fq", sai.output_path.as_str(), index)).unwrap();

    assert_eq!(sai.command, "bwa aln -t 4 -f sample.sai refs/hg38.fa sample.fq");
    assert_eq!(sam.command, "bwa samse -f sample.sam refs/hg38.fa sample.sai sample.fq");
}

#[rstest]
fn test_config_drives_binaries(index: &str) {
    let config: BwaPrepConfig = toml_config("[tools]\nbwa = \"/opt/bwa\"\n");

    let opts = AlnOptions {
        bwa: config.tools.bwa.clone(),
        threads: config.defaults.threads,
        ..AlnOptions::new("s.fastq", index)
    };

    assert_eq!(
        aln(&opts).unwrap().command,
        "/opt/bwa aln -t 4 -f s.sai refs/hg38.fa s.fastq"
    );
}

#[rstest]
fn test_split_into_fresh_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let outdir = tmp.path().join("chunks");

    let opts = SplitOptions {
        number_of_reads: 250_000,
        output_directory: outdir.to_string_lossy().to_string(),
        ..SplitOptions::new("x.fastq")
    };
    let result = split_fastq(&opts).unwrap();

    assert_eq!(outdir.is_dir(), true);
    assert_eq!(result.command.contains(" -l 1000000 -d "), true);
}

#[rstest]
fn test_paired_split_commands() {
    let paired = split_paired_end_fastq_files(&PairedSplitOptions::new(
        "r1.fastq.gz",
        "r2.fastq.gz",
    ))
    .unwrap();

    assert_eq!(paired.read1.is_gzipped, true);
    assert_eq!(paired.read2.is_gzipped, true);
    assert_eq!(paired.read1.result.output_path, "r1.fastq.");
    assert_eq!(paired.read2.result.output_path, "r2.fastq.");
}

#[rstest]
fn test_missing_index_produces_no_command() {
    let result = aln(&AlnOptions::new("a.fq", ""));

    assert_eq!(matches!(result, Err(BwaPrepError::MissingArgument("index"))), true);
}

#[rstest]
fn test_command_result_json() {
    let result = sampe(&SampeOptions::new("a.fq", "b.fq", "a.sai", "b.sai", "ref")).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: CommandResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back, result);
    assert_eq!(json.contains("\"output_path\":\"a.sam\""), true);
}

fn toml_config(contents: &str) -> BwaPrepConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bwaprep.toml");
    std::fs::write(&path, contents).unwrap();
    BwaPrepConfig::try_from(path.as_path()).unwrap()
}
