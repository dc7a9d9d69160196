use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let modes = conn
        .get_binding_modes()
        .map_err(|err| client_error("get_binding_modes failed", err))?;

    match format {
        OutputFormat::Json => print_json(&modes),
        OutputFormat::Table | OutputFormat::Pretty => {
            for mode in &modes {
                println!("{mode}");
            }
        }
    }
    Ok(SUCCESS)
}
