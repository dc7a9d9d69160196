use std::path::PathBuf;

use crate::cmd::TickArgs;
use crate::exit::{client_error, CliError, CliResult, FAILURE, SUCCESS};

pub fn run(args: TickArgs, socket: &Option<PathBuf>) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let ack = conn
        .send_tick(&args.payload)
        .map_err(|err| client_error("send_tick failed", err))?;

    if ack.success {
        Ok(SUCCESS)
    } else {
        Err(CliError::new(FAILURE, "server rejected the tick"))
    }
}
