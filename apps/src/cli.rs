use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default `warn`
/// level, e.g. `RUST_LOG=debug query_proposals ...`.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses the command line. Usage errors map to exit status 1 like every other
/// failure; `--help` and `--version` exit 0.
pub fn parse_args<A: Parser>() -> Result<A, ExitCode> {
    A::try_parse().map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

pub fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
