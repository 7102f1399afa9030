use anyhow::Result;
use serde::Serialize;

use bwaprep_core::CommandResult;
use bwaprep_split::PairedSplit;

pub fn print_result(result: &CommandResult, json: bool) -> Result<()> {
    if json {
        print_json(result)
    } else {
        println!("{}", result);
        Ok(())
    }
}

pub fn print_paired(paired: &PairedSplit, json: bool) -> Result<()> {
    if json {
        print_json(paired)
    } else {
        for command in paired.commands() {
            println!("{}", command);
        }
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
