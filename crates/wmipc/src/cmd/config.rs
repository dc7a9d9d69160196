use std::path::PathBuf;

use crate::exit::{client_error, CliResult, SUCCESS};

pub fn run(socket: &Option<PathBuf>) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let config = conn
        .get_config()
        .map_err(|err| client_error("get_config failed", err))?;
    // Raw text, independent of --format: this is meant for piping.
    print!("{config}");
    Ok(SUCCESS)
}
