use anyhow::Result;
use clap::ArgMatches;

use bwaprep_align::{AlnOptions, SampeOptions, SamseOptions, aln, sampe, samse};
use bwaprep_core::BwaPrepConfig;
use bwaprep_core::utils::parse_positive_int;

use crate::output::print_result;

/// A string argument, or an empty string so the builder reports it as missing.
pub(crate) fn string_arg(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

fn bwa_arg(matches: &ArgMatches, config: &BwaPrepConfig) -> String {
    matches
        .get_one::<String>("bwa")
        .cloned()
        .unwrap_or_else(|| config.tools.bwa.clone())
}

pub fn aln_options(matches: &ArgMatches, config: &BwaPrepConfig) -> Result<AlnOptions> {
    let threads = match matches.get_one::<String>("threads") {
        Some(threads) => parse_positive_int("threads", threads)?,
        None => config.defaults.threads,
    };

    Ok(AlnOptions {
        fastq: string_arg(matches, "fastq"),
        index: string_arg(matches, "index"),
        threads,
        output: string_arg(matches, "output"),
        bwa: bwa_arg(matches, config),
    })
}

pub fn samse_options(matches: &ArgMatches, config: &BwaPrepConfig) -> SamseOptions {
    SamseOptions {
        fastq: string_arg(matches, "fastq"),
        aln: string_arg(matches, "aln"),
        index: string_arg(matches, "index"),
        output: string_arg(matches, "output"),
        bwa: bwa_arg(matches, config),
    }
}

pub fn sampe_options(matches: &ArgMatches, config: &BwaPrepConfig) -> SampeOptions {
    SampeOptions {
        fastq1: string_arg(matches, "fastq1"),
        fastq2: string_arg(matches, "fastq2"),
        aln1: string_arg(matches, "aln1"),
        aln2: string_arg(matches, "aln2"),
        index: string_arg(matches, "index"),
        output: string_arg(matches, "output"),
        bwa: bwa_arg(matches, config),
    }
}

pub fn run_aln(matches: &ArgMatches, config: &BwaPrepConfig, json: bool) -> Result<()> {
    let result = aln(&aln_options(matches, config)?)?;
    print_result(&result, json)
}

pub fn run_samse(matches: &ArgMatches, config: &BwaPrepConfig, json: bool) -> Result<()> {
    let result = samse(&samse_options(matches, config))?;
    print_result(&result, json)
}

pub fn run_sampe(matches: &ArgMatches, config: &BwaPrepConfig, json: bool) -> Result<()> {
    let result = sampe(&sampe_options(matches, config))?;
    print_result(&result, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::cli::{create_aln_cli, create_sampe_cli};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn config() -> BwaPrepConfig {
        let mut config = BwaPrepConfig::default();
        config.tools.bwa = "/opt/bwa/bwa".to_string();
        config.defaults.threads = 8;
        config
    }

    #[rstest]
    fn test_aln_uses_config_defaults(config: BwaPrepConfig) {
        let matches = create_aln_cli().get_matches_from(["aln", "s.fastq", "ref"]);
        let result = aln(&aln_options(&matches, &config).unwrap()).unwrap();

        assert_eq!(result.command, "/opt/bwa/bwa aln -t 8 -f s.sai ref s.fastq");
    }

    #[rstest]
    fn test_aln_flags_override_config(config: BwaPrepConfig) {
        let matches = create_aln_cli().get_matches_from([
            "aln", "s.fastq", "ref", "--threads", "2", "--bwa", "bwa",
        ]);
        let result = aln(&aln_options(&matches, &config).unwrap()).unwrap();

        assert_eq!(result.command, "bwa aln -t 2 -f s.sai ref s.fastq");
    }

    #[rstest]
    #[case("four")]
    #[case("0")]
    fn test_aln_bad_threads(config: BwaPrepConfig, #[case] threads: &str) {
        let matches =
            create_aln_cli().get_matches_from(["aln", "s.fastq", "ref", "--threads", threads]);
        assert_eq!(aln_options(&matches, &config).is_err(), true);
    }

    #[rstest]
    fn test_aln_missing_index_is_reported(config: BwaPrepConfig) {
        let matches = create_aln_cli().get_matches_from(["aln", "s.fastq"]);
        let opts = aln_options(&matches, &config).unwrap();

        let err = aln(&opts).unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: index");
    }

    #[rstest]
    fn test_sampe_from_cli() {
        let matches = create_sampe_cli()
            .get_matches_from(["sampe", "a.fq", "b.fq", "a.sai", "b.sai", "ref"]);
        let result = sampe(&sampe_options(&matches, &BwaPrepConfig::default())).unwrap();

        assert_eq!(result.command, "bwa sampe -f a.sam ref a.sai b.sai a.fq b.fq");
    }
}
