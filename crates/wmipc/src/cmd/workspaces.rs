use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_workspaces, OutputFormat};

pub fn run(socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let workspaces = conn
        .get_workspaces()
        .map_err(|err| client_error("get_workspaces failed", err))?;
    print_workspaces(&workspaces, format);
    Ok(SUCCESS)
}
