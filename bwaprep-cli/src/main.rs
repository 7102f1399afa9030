mod align;
mod output;
mod settings;
mod split;

use anyhow::Result;
use clap::{Arg, ArgAction, Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bwaprep";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Build bwa alignment and FASTQ chunking commands for batch pipelines. Commands are printed, never run.")
        .subcommand_required(true)
        .arg(arg!(--config <config> "Path to a TOML file with tool paths and defaults.").global(true))
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON instead of bare commands.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v info, -vv debug).")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(align::cli::create_aln_cli())
        .subcommand(align::cli::create_samse_cli())
        .subcommand(align::cli::create_sampe_cli())
        .subcommand(split::cli::create_split_cli())
        .subcommand(split::cli::create_split_paired_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    settings::init_logging(matches.get_count("verbose"));
    let config = settings::load_config(&matches)?;
    let json = matches.get_flag("json");

    match matches.subcommand() {
        //
        // ALIGNER
        //
        Some((align::cli::ALN_CMD, matches)) => {
            align::handlers::run_aln(matches, &config, json)?;
        }
        Some((align::cli::SAMSE_CMD, matches)) => {
            align::handlers::run_samse(matches, &config, json)?;
        }
        Some((align::cli::SAMPE_CMD, matches)) => {
            align::handlers::run_sampe(matches, &config, json)?;
        }

        //
        // FASTQ CHUNKING
        //
        Some((split::cli::SPLIT_CMD, matches)) => {
            split::handlers::run_split(matches, &config, json)?;
        }
        Some((split::cli::SPLIT_PAIRED_CMD, matches)) => {
            split::handlers::run_split_paired(matches, &config, json)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
