//! Input loop: reads queries from stdin and hands them to the adapter.

use concierge_client::{ChatAdapter, ChatBackend, ChatView, SubmitOutcome};
use concierge_common::ConciergeError;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::TerminalView;

const HELP: &str = "Commands: /whoami shows the session, /help shows this text, /quit exits.";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    WhoAmI,
    Query(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/help" => Command::Help,
        "/whoami" => Command::WhoAmI,
        _ => Command::Query(line),
    }
}

fn describe_session<B: ChatBackend>(adapter: &ChatAdapter<B>) -> String {
    let session = adapter.session();
    let location = adapter
        .location_status()
        .map(|status| status.label())
        .unwrap_or("no location lookup");
    format!(
        "user {} at {} ({location})",
        session.user_id(),
        session.coordinates()
    )
}

/// Read lines until EOF or `/quit`, submitting each one. Location updates
/// are applied as soon as they arrive, between submissions.
pub async fn run_interactive<B: ChatBackend>(
    adapter: &mut ChatAdapter<B>,
    view: &mut TerminalView,
) -> Result<(), ConciergeError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut location_open = true;

    adapter.sync_location(view);
    view.set_input_enabled(true);
    view.focus_input();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Help => {
                        view.note(HELP);
                        view.focus_input();
                    }
                    Command::WhoAmI => {
                        view.note(&describe_session(adapter));
                        view.focus_input();
                    }
                    Command::Query(query) => {
                        if let SubmitOutcome::Ignored = adapter.submit(view, query).await {
                            view.focus_input();
                        }
                    }
                }
            }
            open = adapter.location_changed(), if location_open => {
                location_open = open;
                adapter.sync_location(view);
            }
        }
    }

    tracing::debug!("input closed, leaving chat loop");
    Ok(())
}

/// Submit a single query. A failed exchange is reported as an error so
/// the process can exit non-zero.
pub async fn run_once<B: ChatBackend>(
    adapter: &mut ChatAdapter<B>,
    view: &mut TerminalView,
    query: &str,
) -> Result<(), ConciergeError> {
    match adapter.submit(view, query).await {
        SubmitOutcome::Answered => Ok(()),
        SubmitOutcome::Failed(e) => Err(e.into()),
        SubmitOutcome::Ignored => Err(ConciergeError::Other("query is empty".into())),
    }
}
