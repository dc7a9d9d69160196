use std::path::PathBuf;

use clap::{Args, Subcommand};
use wmipc_client::{EventTopic, IpcConnection};

use crate::exit::{client_error, CliResult};
use crate::output::OutputFormat;

pub mod bar;
pub mod binding_modes;
pub mod config;
pub mod marks;
pub mod outputs;
pub mod run;
pub mod subscribe;
pub mod tick;
pub mod tree;
pub mod version;
pub mod workspaces;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one or more window manager commands.
    Run(RunArgs),
    /// List workspaces.
    Workspaces,
    /// List outputs.
    Outputs,
    /// Print the layout tree.
    Tree(TreeArgs),
    /// List marks.
    Marks,
    /// List bar ids.
    Bars,
    /// Print one bar's configuration.
    BarConfig(BarConfigArgs),
    /// Print server version information.
    Version,
    /// List binding modes.
    BindingModes,
    /// Print the loaded config text.
    Config,
    /// Broadcast a tick to subscribers.
    Tick(TickArgs),
    /// Subscribe to events and print them as they arrive.
    Subscribe(SubscribeArgs),
}

pub fn run(
    command: Command,
    socket: &Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args, socket, format),
        Command::Workspaces => workspaces::run(socket, format),
        Command::Outputs => outputs::run(socket, format),
        Command::Tree(args) => tree::run(args, socket, format),
        Command::Marks => marks::run(socket, format),
        Command::Bars => bar::run_ids(socket, format),
        Command::BarConfig(args) => bar::run_config(args, socket, format),
        Command::Version => version::run(socket, format),
        Command::BindingModes => binding_modes::run(socket, format),
        Command::Config => config::run(socket),
        Command::Tick(args) => tick::run(args, socket),
        Command::Subscribe(args) => subscribe::run(args, socket, format),
    }
}

/// Open a connection, honoring an explicit `--socket` override.
pub fn open(socket: &Option<PathBuf>) -> CliResult<IpcConnection> {
    let result = match socket {
        Some(path) => IpcConnection::connect_to(path),
        None => IpcConnection::connect(),
    };
    result.map_err(|err| client_error("connect failed", err))
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command text, semicolon-separated for batches.
    pub command: String,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Print only the focused node's subtree.
    #[arg(long)]
    pub focused: bool,
}

#[derive(Args, Debug)]
pub struct BarConfigArgs {
    /// Bar id, as listed by `wmipc bars`.
    pub id: String,
}

#[derive(Args, Debug)]
pub struct TickArgs {
    /// Payload delivered to tick subscribers.
    #[arg(default_value = "")]
    pub payload: String,
}

#[derive(Args, Debug)]
pub struct SubscribeArgs {
    /// Topics to subscribe to (comma-separated). Default: all topics.
    #[arg(long, value_delimiter = ',')]
    pub topics: Option<Vec<EventTopic>>,
    /// Exit after printing N events.
    #[arg(long)]
    pub count: Option<usize>,
}
