use log::debug;

use bwaprep_core::consts::{DEFAULT_BWA, SAM_EXT, SAM_INPUT_SUFFIXES};
use bwaprep_core::utils::{derive_output_path, require};
use bwaprep_core::{CommandResult, Result};

use crate::consts::SAMSE_CMD;

/// Options for `bwa samse`, which turns single-end `.sai` coordinates into SAM.
#[derive(Debug, Clone, PartialEq)]
pub struct SamseOptions {
    pub fastq: String,
    pub aln: String,
    pub index: String,
    pub output: String,
    pub bwa: String,
}

impl Default for SamseOptions {
    fn default() -> Self {
        SamseOptions {
            fastq: String::new(),
            aln: String::new(),
            index: String::new(),
            output: String::new(),
            bwa: DEFAULT_BWA.to_string(),
        }
    }
}

impl SamseOptions {
    pub fn new(
        fastq: impl Into<String>,
        aln: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        SamseOptions {
            fastq: fastq.into(),
            aln: aln.into(),
            index: index.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("fastq", &self.fastq)?;
        require("aln", &self.aln)?;
        require("index", &self.index)?;
        require("bwa", &self.bwa)?;
        Ok(())
    }

    pub fn output_path(&self) -> String {
        if self.output.trim().is_empty() {
            derive_output_path(&self.fastq, SAM_INPUT_SUFFIXES, SAM_EXT)
        } else {
            self.output.clone()
        }
    }

    pub fn build(&self) -> Result<CommandResult> {
        samse(self)
    }
}

///
/// Build a `bwa samse` command.
///
/// Produces `<bwa> samse -f <output> <index> <aln> <fastq>`. Without an explicit
/// output the SAM file sits next to the FASTQ, with `.fastq`, `.fq`, `.fastq.gz`
/// or `.fq.gz` replaced by `.sam`.
///
pub fn samse(opts: &SamseOptions) -> Result<CommandResult> {
    opts.validate()?;

    let output = opts.output_path();
    let command = format!(
        "{} {} -f {} {} {} {}",
        opts.bwa, SAMSE_CMD, output, opts.index, opts.aln, opts.fastq
    );

    debug!("Built samse command: {}", command);

    Ok(CommandResult::new(command, output))
}
