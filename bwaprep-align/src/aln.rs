use log::debug;

use bwaprep_core::consts::{ALN_INPUT_SUFFIXES, DEFAULT_BWA, DEFAULT_THREADS, SAI_EXT};
use bwaprep_core::utils::{derive_output_path, require, require_positive};
use bwaprep_core::{CommandResult, Result};

use crate::consts::ALN_CMD;

///
/// Options for `bwa aln`, which finds the suffix-array coordinates of a read set.
///
/// An empty or blank `output` means "derive it from `fastq`": one of `.fastq.gz`, `.fastq`
/// or `.fq` is stripped and `.sai` appended.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AlnOptions {
    pub fastq: String,
    pub index: String,
    pub threads: u32,
    pub output: String,
    pub bwa: String,
}

impl Default for AlnOptions {
    fn default() -> Self {
        AlnOptions {
            fastq: String::new(),
            index: String::new(),
            threads: DEFAULT_THREADS,
            output: String::new(),
            bwa: DEFAULT_BWA.to_string(),
        }
    }
}

impl AlnOptions {
    pub fn new(fastq: impl Into<String>, index: impl Into<String>) -> Self {
        AlnOptions {
            fastq: fastq.into(),
            index: index.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("fastq", &self.fastq)?;
        require("index", &self.index)?;
        require("bwa", &self.bwa)?;
        require_positive("threads", self.threads)?;
        Ok(())
    }

    /// The `-f` target: either the user's choice or the derived `.sai` path.
    pub fn output_path(&self) -> String {
        if self.output.trim().is_empty() {
            derive_output_path(&self.fastq, ALN_INPUT_SUFFIXES, SAI_EXT)
        } else {
            self.output.clone()
        }
    }

    pub fn build(&self) -> Result<CommandResult> {
        aln(self)
    }
}

///
/// Build a `bwa aln` command.
///
/// Produces `<bwa> aln -t <threads> -f <output> <index> <fastq>`.
///
pub fn aln(opts: &AlnOptions) -> Result<CommandResult> {
    opts.validate()?;

    let output = opts.output_path();
    let command = format!(
        "{} {} -t {} -f {} {} {}",
        opts.bwa, ALN_CMD, opts.threads, output, opts.index, opts.fastq
    );

    debug!("Built aln command: {}", command);

    Ok(CommandResult::new(command, output))
}
