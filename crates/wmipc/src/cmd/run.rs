use std::path::PathBuf;

use crate::cmd::RunArgs;
use crate::exit::{client_error, CliResult, FAILURE, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run(args: RunArgs, socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let outcomes = conn
        .run_command(&args.command)
        .map_err(|err| client_error("run_command failed", err))?;

    let mut code = SUCCESS;
    match format {
        OutputFormat::Json => print_json(&outcomes),
        OutputFormat::Table | OutputFormat::Pretty => {
            for (index, outcome) in outcomes.iter().enumerate() {
                if outcome.success {
                    println!("command {index}: ok");
                } else {
                    let detail = outcome.error.as_deref().unwrap_or("failed");
                    println!("command {index}: {detail}");
                }
            }
        }
    }
    if outcomes.iter().any(|outcome| !outcome.success) {
        code = FAILURE;
    }

    Ok(code)
}
