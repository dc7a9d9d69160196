mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wmipc", version, about = "i3/sway IPC command line client")]
struct Cli {
    /// Socket path; defaults to I3SOCK/SWAYSOCK discovery.
    #[arg(long, value_name = "PATH", global = true)]
    socket: Option<std::path::PathBuf>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "WMIPC_LOG",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, &cli.socket, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::try_parse_from(["wmipc", "run", "workspace 2"]).unwrap();
        assert!(matches!(cli.command, Command::Run(_)));
    }

    #[test]
    fn parses_global_socket_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["wmipc", "workspaces", "--socket", "/tmp/wm.sock"]).unwrap();
        assert_eq!(
            cli.socket.as_deref(),
            Some(std::path::Path::new("/tmp/wm.sock"))
        );
    }

    #[test]
    fn parses_subscribe_topics() {
        let cli =
            Cli::try_parse_from(["wmipc", "subscribe", "--topics", "workspace,tick"]).unwrap();
        match cli.command {
            Command::Subscribe(args) => {
                let topics = args.topics.unwrap();
                assert_eq!(topics.len(), 2);
            }
            other => panic!("expected subscribe, got {other:?}"),
        }
    }

    #[test]
    fn log_level_accepts_off() {
        let cli = Cli::try_parse_from(["wmipc", "version", "--log-level", "off"]).unwrap();
        assert!(matches!(cli.log_level, LogLevel::Off));
    }

    #[test]
    fn rejects_unknown_topic() {
        let result = Cli::try_parse_from(["wmipc", "subscribe", "--topics", "nonsense"]);
        assert!(result.is_err());
    }
}
