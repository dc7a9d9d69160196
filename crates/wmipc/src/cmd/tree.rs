use std::path::PathBuf;

use wmipc_proto::Node;

use crate::cmd::TreeArgs;
use crate::exit::{client_error, CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_json, OutputFormat};

pub fn run(args: TreeArgs, socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let mut conn = crate::cmd::open(socket)?;
    let root = conn
        .get_tree()
        .map_err(|err| client_error("get_tree failed", err))?;

    let node = if args.focused {
        root.find_focused()
            .ok_or_else(|| CliError::new(FAILURE, "no focused node in the tree"))?
    } else {
        &root
    };

    match format {
        OutputFormat::Json => print_json(node),
        OutputFormat::Table | OutputFormat::Pretty => print_indented(node, 0),
    }
    Ok(SUCCESS)
}

fn print_indented(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = node.name.as_deref().unwrap_or("-");
    let focus = if node.focused { " [focused]" } else { "" };
    println!(
        "{indent}{:?} {} ({}){focus}",
        node.node_type,
        name,
        node.layout.as_str()
    );
    for child in &node.nodes {
        print_indented(child, depth + 1);
    }
}
