use std::path::PathBuf;

use crate::cmd::BarConfigArgs;
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run_ids(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let ids = conn
        .get_bar_ids()
        .map_err(|err| client_error("get_bar_ids failed", err))?;

    match format {
        OutputFormat::Json => print_json(&ids),
        OutputFormat::Table | OutputFormat::Pretty => {
            for id in &ids {
                println!("{id}");
            }
        }
    }
    Ok(SUCCESS)
}

pub fn run_config(
    args: BarConfigArgs,
    socket: &Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let bar = conn
        .get_bar_config(&args.id)
        .map_err(|err| client_error("get_bar_config failed", err))?;

    match format {
        OutputFormat::Json => print_json(&bar),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("id: {}", bar.id);
            println!("mode: {}", bar.mode);
            println!("position: {}", bar.position);
            println!("status_command: {}", bar.status_command);
            println!("font: {}", bar.font);
            for (part, color) in &bar.colors {
                println!("color {}: {color}", part.as_str());
            }
        }
    }
    Ok(SUCCESS)
}
