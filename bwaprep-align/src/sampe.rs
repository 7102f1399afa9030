use log::debug;

use bwaprep_core::consts::{DEFAULT_BWA, SAM_EXT, SAM_INPUT_SUFFIXES};
use bwaprep_core::utils::{derive_output_path, require};
use bwaprep_core::{CommandResult, Result};

use crate::consts::SAMPE_CMD;

/// Options for `bwa sampe`, which pairs two mates' `.sai` files into SAM.
#[derive(Debug, Clone, PartialEq)]
pub struct SampeOptions {
    pub fastq1: String,
    pub fastq2: String,
    pub aln1: String,
    pub aln2: String,
    pub index: String,
    pub output: String,
    pub bwa: String,
}

impl Default for SampeOptions {
    fn default() -> Self {
        SampeOptions {
            fastq1: String::new(),
            fastq2: String::new(),
            aln1: String::new(),
            aln2: String::new(),
            index: String::new(),
            output: String::new(),
            bwa: DEFAULT_BWA.to_string(),
        }
    }
}

impl SampeOptions {
    pub fn new(
        fastq1: impl Into<String>,
        fastq2: impl Into<String>,
        aln1: impl Into<String>,
        aln2: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        SampeOptions {
            fastq1: fastq1.into(),
            fastq2: fastq2.into(),
            aln1: aln1.into(),
            aln2: aln2.into(),
            index: index.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("fastq1", &self.fastq1)?;
        require("fastq2", &self.fastq2)?;
        require("aln1", &self.aln1)?;
        require("aln2", &self.aln2)?;
        require("index", &self.index)?;
        require("bwa", &self.bwa)?;
        Ok(())
    }

    /// Default output is named after the first mate.
    pub fn output_path(&self) -> String {
        if self.output.trim().is_empty() {
            derive_output_path(&self.fastq1, SAM_INPUT_SUFFIXES, SAM_EXT)
        } else {
            self.output.clone()
        }
    }

    pub fn build(&self) -> Result<CommandResult> {
        sampe(self)
    }
}

///
/// Build a `bwa sampe` command.
///
/// The argument order is fixed:
/// `<bwa> sampe -f <output> <index> <aln1> <aln2> <fastq1> <fastq2>`.
///
pub fn sampe(opts: &SampeOptions) -> Result<CommandResult> {
    opts.validate()?;

    let output = opts.output_path();
    let command = format!(
        "{} {} -f {} {} {} {} {} {}",
        opts.bwa, SAMPE_CMD, output, opts.index, opts.aln1, opts.aln2, opts.fastq1, opts.fastq2
    );

    debug!("Built sampe command: {}", command);

    Ok(CommandResult::new(command, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bwaprep_core::BwaPrepError;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn opts() -> SampeOptions {
        SampeOptions::new("a.fq", "b.fq", "a.sai", "b.sai", "ref")
    }

    #[rstest]
    fn test_sampe_literal(opts: SampeOptions) {
        let result = sampe(&opts).unwrap();

        assert_eq!(result.command, "bwa sampe -f a.sam ref a.sai b.sai a.fq b.fq");
        assert_eq!(result.output_path, "a.sam");
    }

    #[rstest]
    fn test_sampe_token_order(opts: SampeOptions) {
        let result = sampe(&opts).unwrap();
        let tokens: Vec<&str> = result.command.split_whitespace().collect();

        assert_eq!(
            tokens,
            vec!["bwa", "sampe", "-f", "a.sam", "ref", "a.sai", "b.sai", "a.fq", "b.fq"]
        );
    }

    #[rstest]
    fn test_sampe_output_from_first_mate() {
        let opts = SampeOptions::new(
            "lane1_R1.fastq.gz",
            "lane1_R2.fastq.gz",
            "lane1_R1.sai",
            "lane1_R2.sai",
            "ref",
        );
        assert_eq!(sampe(&opts).unwrap().output_path, "lane1_R1.sam");
    }

    #[rstest]
    fn test_sampe_blank_output_is_derived(opts: SampeOptions) {
        let opts = SampeOptions {
            output: " ".to_string(),
            ..opts
        };
        let result = sampe(&opts).unwrap();

        assert_eq!(result.output_path, "a.sam");
        assert_eq!(result.command, "bwa sampe -f a.sam ref a.sai b.sai a.fq b.fq");
    }

    #[rstest]
    fn test_sampe_is_pure(opts: SampeOptions) {
        assert_eq!(sampe(&opts).unwrap(), sampe(&opts).unwrap());
    }

    #[rstest]
    #[case("fastq2")]
    #[case("aln2")]
    fn test_sampe_missing_mate(opts: SampeOptions, #[case] field: &str) {
        let mut opts = opts;
        match field {
            "fastq2" => opts.fastq2.clear(),
            _ => opts.aln2.clear(),
        }

        let err = sampe(&opts).unwrap_err();
        assert_eq!(err.to_string(), format!("Missing required argument: {field}"));
    }

    #[rstest]
    fn test_sampe_missing_index(opts: SampeOptions) {
        let opts = SampeOptions {
            index: String::new(),
            ..opts
        };
        let err = sampe(&opts).unwrap_err();
        assert_eq!(matches!(err, BwaPrepError::MissingArgument("index")), true);
    }
}
