use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_outputs, OutputFormat};

pub fn run(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let outputs = conn
        .get_outputs()
        .map_err(|err| client_error("get_outputs failed", err))?;
    print_outputs(&outputs, format);
    Ok(SUCCESS)
}
