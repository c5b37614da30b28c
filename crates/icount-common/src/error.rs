use thiserror::Error;

/// User-facing input errors of the conversion tools.
///
/// The `Display` output is the exact message printed to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// No value was supplied.
    #[error("Usage: time.py <number>")]
    MissingArgument,

    /// An argument could not be parsed as a floating-point number.
    #[error("{}", invalid_number_message(*position))]
    InvalidNumber {
        /// 1-based position of the offending argument.
        position: usize,
        /// The raw argument text.
        value: String,
    },
}

fn invalid_number_message(position: usize) -> String {
    if position <= 1 {
        "The first argument must be a number.".to_string()
    } else {
        format!("The argument {position} must be a number.")
    }
}

/// Convenience type alias for timebase operations.
pub type TimeResult<T> = Result<T, TimeError>;
