use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use wmipc_proto::{Event, Output, Workspace};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_workspaces(workspaces: &[Workspace], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&workspaces),
        OutputFormat::Table => {
            let mut table = new_table(vec!["NUM", "NAME", "OUTPUT", "VISIBLE", "FOCUSED", "URGENT"]);
            for ws in workspaces {
                table.add_row(vec![
                    ws.num.to_string(),
                    ws.name.clone(),
                    ws.output.clone(),
                    ws.visible.to_string(),
                    ws.focused.to_string(),
                    ws.urgent.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for ws in workspaces {
                let marker = if ws.focused { "*" } else { " " };
                println!("{marker} {} on {}", ws.name, ws.output);
            }
        }
    }
}

pub fn print_outputs(outputs: &[Output], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&outputs),
        OutputFormat::Table => {
            let mut table = new_table(vec!["NAME", "ACTIVE", "PRIMARY", "WORKSPACE", "GEOMETRY"]);
            for output in outputs {
                table.add_row(vec![
                    output.name.clone(),
                    output.active.to_string(),
                    output.primary.to_string(),
                    output.current_workspace.clone().unwrap_or_default(),
                    format!(
                        "{}x{}+{}+{}",
                        output.rect.width, output.rect.height, output.rect.x, output.rect.y
                    ),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for output in outputs {
                println!(
                    "{} active={} workspace={}",
                    output.name,
                    output.active,
                    output.current_workspace.as_deref().unwrap_or("-")
                );
            }
        }
    }
}

pub fn print_event(event: &Event, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            // One event per line so the stream stays greppable.
            println!(
                "{}",
                serde_json::to_string(event).unwrap_or_else(|_| "null".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => match event {
            Event::Workspace(e) => {
                let name = e
                    .current
                    .as_ref()
                    .and_then(|node| node.name.clone())
                    .unwrap_or_default();
                println!("workspace {:?} {name}", e.change);
            }
            Event::Output(e) => println!("output {}", e.change),
            Event::Mode(e) => println!("mode {}", e.change),
            Event::Window(e) => {
                let name = e.container.name.clone().unwrap_or_default();
                println!("window {:?} {name}", e.change);
            }
            Event::BarconfigUpdate(bar) => println!("barconfig_update {}", bar.id),
            Event::Binding(e) => println!("binding {}", e.binding.command),
            Event::Shutdown(e) => println!("shutdown {:?}", e.change),
            Event::Tick(e) => println!("tick first={} {}", e.first, e.payload),
        },
    }
}

#[cfg(test)]
mod tests {
    use wmipc_proto::Rect;

    use super::*;

    // The print helpers write to stdout; these only check they don't panic
    // across formats.
    #[test]
    fn print_workspaces_all_formats() {
        let workspaces = vec![Workspace {
            num: 1,
            name: "1".into(),
            visible: true,
            focused: true,
            urgent: false,
            rect: Rect::default(),
            output: "eDP-1".into(),
        }];
        for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Pretty] {
            print_workspaces(&workspaces, format);
        }
    }

    #[test]
    fn print_outputs_all_formats() {
        let outputs = vec![Output {
            name: "eDP-1".into(),
            active: true,
            primary: false,
            current_workspace: None,
            rect: Rect::default(),
        }];
        for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Pretty] {
            print_outputs(&outputs, format);
        }
    }
}
