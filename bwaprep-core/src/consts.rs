pub const DEFAULT_BWA: &str = "bwa";
pub const DEFAULT_SPLIT: &str = "split";
pub const DEFAULT_ZCAT: &str = "zcat";

pub const DEFAULT_THREADS: u32 = 4;
pub const DEFAULT_NUMBER_OF_READS: u64 = 10_000_000;
pub const DEFAULT_OUTPUT_DIRECTORY: &str = ".";

// a FASTQ record is always four physical lines
pub const LINES_PER_READ: u64 = 4;

pub const SAI_EXT: &str = "sai";
pub const SAM_EXT: &str = "sam";
pub const GZ_EXT: &str = "gz";

pub const ALN_INPUT_SUFFIXES: &[&str] = &[".fastq.gz", ".fastq", ".fq"];
pub const SAM_INPUT_SUFFIXES: &[&str] = &[".fastq.gz", ".fq.gz", ".fastq", ".fq"];
