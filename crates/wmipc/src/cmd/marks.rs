use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let marks = conn
        .get_marks()
        .map_err(|err| client_error("get_marks failed", err))?;

    match format {
        OutputFormat::Json => print_json(&marks),
        OutputFormat::Table | OutputFormat::Pretty => {
            for mark in &marks {
                println!("{mark}");
            }
        }
    }
    Ok(SUCCESS)
}
