//! `time` entry point.
//!
//! Converts QEMU icount instruction counts to microseconds and back.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use icount_cli::RunError;
use icount_common::TimebaseConfig;
use tracing::info;

fn main() -> Result<ExitCode> {
    // Every argument is a value; `--` and hyphen-leading text are not options.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    init_logging();

    let timebase = TimebaseConfig::default()
        .timebase()
        .context("Invalid built-in timebase")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        values = args.len(),
        "Converting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match icount_cli::run(&args, &timebase, &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(RunError::Input(err)) => {
            writeln!(out, "{err}").context("Failed to write to stdout")?;
            Ok(ExitCode::FAILURE)
        }
        Err(RunError::Io(err)) => Err(err).context("Failed to write to stdout"),
    }
}

/// Initialize logging on stderr. Quiet unless `RUST_LOG` asks for more.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
