use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let version = conn
        .get_version()
        .map_err(|err| client_error("get_version failed", err))?;

    match format {
        OutputFormat::Json => print_json(&version),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("{}", version.human_readable);
            if let Some(config) = &version.loaded_config_file_name {
                println!("config: {config}");
            }
        }
    }
    Ok(SUCCESS)
}
