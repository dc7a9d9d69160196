use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wmipc_client::EventTopic;

use crate::cmd::SubscribeArgs;
use crate::exit::{client_error, CliError, CliResult, SUCCESS};
use crate::output::{print_event, OutputFormat};

pub fn run(args: SubscribeArgs, socket: &Option<PathBuf>, format: OutputFormat) -> CliResult<i32> {
    let topics = args.topics.unwrap_or_else(|| EventTopic::all().to_vec());

    let mut conn = crate::cmd::open(socket)?;
    conn.subscribe(&topics)
        .map_err(|err| client_error("subscribe failed", err))?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printed = 0usize;
    while running.load(Ordering::SeqCst) {
        // Interrupting a blocked read tears the process down via the
        // handler's second signal; a half-read frame is unusable anyway.
        let event = match conn.next_event() {
            Ok(event) => event,
            // Decode failures are scoped to one event; keep streaming.
            Err(err @ wmipc_client::ClientError::UnknownType(_))
            | Err(err @ wmipc_client::ClientError::BadReply { .. }) => {
                tracing::warn!(%err, "skipping undecodable event");
                continue;
            }
            Err(err) => return Err(client_error("event stream failed", err)),
        };

        print_event(&event, format);
        printed = printed.saturating_add(1);

        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
