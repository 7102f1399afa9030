use serde::{Deserialize, Serialize};

use bwaprep_core::consts::{
    DEFAULT_NUMBER_OF_READS, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_SPLIT, DEFAULT_ZCAT,
};
use bwaprep_core::utils::{is_gzipped_path, require};
use bwaprep_core::{CommandResult, Result};

use crate::consts::{PREFIX_SEPARATOR, READ1_MARKER, READ2_MARKER};
use crate::split::{SplitOptions, split_fastq};

///
/// Options shared by both mates of a paired-end split. Each mate gets its own
/// default prefix, so there is no `prefix` here.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSplitOptions {
    pub fastq1: String,
    pub fastq2: String,
    pub number_of_reads: u64,
    pub numeric_suffix: bool,
    pub split_bin: String,
    pub zcat_bin: String,
    pub output_directory: String,
}

impl Default for PairedSplitOptions {
    fn default() -> Self {
        PairedSplitOptions {
            fastq1: String::new(),
            fastq2: String::new(),
            number_of_reads: DEFAULT_NUMBER_OF_READS,
            numeric_suffix: true,
            split_bin: DEFAULT_SPLIT.to_string(),
            zcat_bin: DEFAULT_ZCAT.to_string(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
        }
    }
}

impl PairedSplitOptions {
    pub fn new(fastq1: impl Into<String>, fastq2: impl Into<String>) -> Self {
        PairedSplitOptions {
            fastq1: fastq1.into(),
            fastq2: fastq2.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("fastq1", &self.fastq1)?;
        require("fastq2", &self.fastq2)?;
        Ok(())
    }

    /// Single-file options for one mate, with compression judged from its name.
    pub fn mate_options(&self, fastq: &str) -> SplitOptions {
        SplitOptions {
            fastq: fastq.to_string(),
            number_of_reads: self.number_of_reads,
            prefix: String::new(),
            numeric_suffix: self.numeric_suffix,
            is_gzipped: is_gzipped_path(fastq),
            split_bin: self.split_bin.clone(),
            zcat_bin: self.zcat_bin.clone(),
            output_directory: self.output_directory.clone(),
        }
    }

    ///
    /// Options for both mates. Mates whose default prefixes coincide (same file
    /// name in two directories, or `s.fastq` next to `s.fastq.gz`) get an
    /// `R1.`/`R2.` marker so neither overwrites the other's chunks.
    ///
    pub fn mate_pair_options(&self) -> (SplitOptions, SplitOptions) {
        let mut read1 = self.mate_options(&self.fastq1);
        let mut read2 = self.mate_options(&self.fastq2);

        let prefix1 = read1.file_prefix();
        let prefix2 = read2.file_prefix();
        if prefix1 == prefix2 {
            read1.prefix = format!("{}{}{}", prefix1, READ1_MARKER, PREFIX_SEPARATOR);
            read2.prefix = format!("{}{}{}", prefix2, READ2_MARKER, PREFIX_SEPARATOR);
        }

        (read1, read2)
    }

    pub fn build(&self) -> Result<PairedSplit> {
        split_paired_end_fastq_files(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MateSplit {
    pub fastq: String,
    pub is_gzipped: bool,
    pub result: CommandResult,
}

/// One split command per mate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedSplit {
    pub read1: MateSplit,
    pub read2: MateSplit,
}

impl PairedSplit {
    pub fn commands(&self) -> [&str; 2] {
        [
            self.read1.result.command.as_str(),
            self.read2.result.command.as_str(),
        ]
    }
}

///
/// Build split commands for both files of a paired-end run.
///
/// Each mate is classified as gzipped or not by its `.gz` suffix, independently
/// of the other, and gets the matching plain or `zcat | split` command.
///
/// Which chunk of read 1 belongs with which chunk of read 2 is left to the
/// caller: chunk names depend on how `split` numbers its output, and nothing
/// here checks that the two mates hold the same number of reads.
///
pub fn split_paired_end_fastq_files(opts: &PairedSplitOptions) -> Result<PairedSplit> {
    opts.validate()?;

    let (read1_opts, read2_opts) = opts.mate_pair_options();

    let mate = |mate_opts: &SplitOptions| -> Result<MateSplit> {
        let result = split_fastq(mate_opts)?;
        Ok(MateSplit {
            fastq: mate_opts.fastq.clone(),
            is_gzipped: mate_opts.is_gzipped,
            result,
        })
    };

    Ok(PairedSplit {
        read1: mate(&read1_opts)?,
        read2: mate(&read2_opts)?,
    })
}
