mod cli;
mod repl;
mod setup;
mod terminal;

use std::io::IsTerminal;
use std::process::ExitCode;

use concierge_client::{spawn_location, ChatAdapter};
use concierge_common::ConciergeError;
use concierge_config::ConciergeConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::terminal::{Mode, TerminalView};

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = setup::filter_directive(directive) {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve config before logging exists, so problems are returned rather
/// than logged into a subscriber that is not installed yet.
fn load_config(args: &Args) -> Result<(ConciergeConfig, Option<String>), ConciergeError> {
    match args.config {
        Some(ref path) => Ok((concierge_config::load_config_from(path)?, None)),
        None => match concierge_config::load_config() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((
                ConciergeConfig::default(),
                Some(format!("failed to load config, using defaults: {e}")),
            )),
        },
    }
}

async fn run(config: ConciergeConfig, args: Args) -> Result<(), ConciergeError> {
    let backend = setup::build_backend(&config)?;
    tracing::info!(url = backend.url(), "chat backend ready");

    let watch = spawn_location(setup::build_location_provider(&config));
    let mut adapter = ChatAdapter::new(backend, setup::build_session(&config))
        .with_location(watch, setup::first_submit_wait(&config));

    let mode = if args.once.is_some() {
        Mode::Once
    } else if std::io::stdin().is_terminal() {
        Mode::Interactive
    } else {
        Mode::Piped
    };
    let mut view = TerminalView::new(&config.display, mode);

    match args.once {
        Some(ref query) => repl::run_once(&mut adapter, &mut view, query).await,
        None => {
            if mode == Mode::Interactive {
                view.note("Ask a question, or /help for commands.");
            }
            repl::run_interactive(&mut adapter, &mut view).await
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (mut config, load_warning) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("concierge: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&setup::log_directive(args.log_level.as_deref(), &config));
    if let Some(warning) = load_warning {
        tracing::warn!("{warning}");
    }

    setup::apply_overrides(&mut config, &args);
    if let Err(e) = concierge_config::validation::validate(&config) {
        eprintln!("concierge: {e}");
        return ExitCode::FAILURE;
    }

    if args.print_config {
        println!("{}", concierge_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("concierge: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config, args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("concierge: {e}");
            ExitCode::FAILURE
        }
    }
}
