//! lsishow CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use lsishow::cli::{Cli, CommandDispatcher};
use lsishow::shell::SystemRunner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so the report is not interleaved with logs
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lsishow=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lsishow=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("lsishow starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new(Box::new(SystemRunner::new()));
    let mut stdout = std::io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}
