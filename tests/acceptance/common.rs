//! Common utilities for acceptance tests.

use icount_cli::{run, RunError};
use icount_common::Timebase;

/// Captured result of one converter invocation.
#[derive(Debug)]
pub struct Invocation {
    /// Everything the user would see on stdout.
    pub stdout: String,
    /// Process exit code the binary would return.
    pub exit_code: i32,
}

/// Run the converter in-process with the default timebase, mirroring how the
/// binary maps errors to stdout and exit codes.
pub fn invoke(args: &[&str]) -> Invocation {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    let mut out = Vec::new();
    let exit_code = match run(&args, &Timebase::default(), &mut out) {
        Ok(()) => 0,
        Err(RunError::Input(err)) => {
            out.extend_from_slice(format!("{err}\n").as_bytes());
            1
        }
        Err(RunError::Io(err)) => panic!("in-memory write failed: {err}"),
    };

    Invocation {
        stdout: String::from_utf8(out).expect("report is UTF-8"),
        exit_code,
    }
}

/// Split output into lines for comparison.
pub fn lines(invocation: &Invocation) -> Vec<&str> {
    invocation.stdout.lines().collect()
}
