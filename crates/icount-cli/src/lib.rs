//! ISNS/microsecond converter.
//!
//! Library half of the `time` binary. Arguments are validated up front, so a
//! bad value produces no partial output.
//!
//! # Example
//!
//! ```
//! use icount_cli::run;
//! use icount_common::Timebase;
//!
//! let mut out = Vec::new();
//! run(&["0".to_string(), "100".to_string()], &Timebase::default(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1.71\n1.71\n");
//! ```

pub mod report;

use std::ffi::OsStr;
use std::io::Write;

use icount_common::{TimeError, TimeResult, Timebase};
use thiserror::Error;
use tracing::debug;

pub use report::{Report, SpanReport};

/// Failure of a [`run`] invocation.
#[derive(Debug, Error)]
pub enum RunError {
    /// Bad user input; the message is meant for the user as-is.
    #[error(transparent)]
    Input(#[from] TimeError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse every argument as a float.
///
/// Surrounding whitespace is ignored. Arguments that are not valid UTF-8 are
/// not numbers. The first argument that fails decides the error.
///
/// # Errors
///
/// [`TimeError::MissingArgument`] for an empty slice, otherwise
/// [`TimeError::InvalidNumber`] with the 1-based position of the bad value.
pub fn parse_values<S: AsRef<OsStr>>(args: &[S]) -> TimeResult<Vec<f64>> {
    if args.is_empty() {
        return Err(TimeError::MissingArgument);
    }

    args.iter()
        .enumerate()
        .map(|(index, arg)| parse_value(index + 1, arg.as_ref()))
        .collect()
}

fn parse_value(position: usize, arg: &OsStr) -> TimeResult<f64> {
    arg.to_str()
        .and_then(|text| text.trim().parse::<f64>().ok())
        .ok_or_else(|| {
            let value = arg.to_string_lossy().into_owned();
            debug!(position, %value, "Rejected non-numeric argument");
            TimeError::InvalidNumber { position, value }
        })
}

/// Parse `args`, build the report and write it to `out`.
///
/// # Errors
///
/// See [`RunError`].
pub fn run<S, W>(args: &[S], timebase: &Timebase, out: &mut W) -> Result<(), RunError>
where
    S: AsRef<OsStr>,
    W: Write,
{
    let values = parse_values(args)?;
    debug!(count = values.len(), "Arguments parsed");

    let report = Report::build(&values, timebase)?;
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
