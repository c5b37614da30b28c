//! Report rendering.
//!
//! One value prints the span/offset table; two or more print one
//! offset-corrected millisecond figure per value.

use std::fmt;

use icount_common::{TimeError, TimeResult, Timebase};

/// Conversions of a single value, in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanReport {
    /// Value interpreted as instructions, in microseconds.
    pub isns_to_us: f64,
    /// Value interpreted as microseconds, in instructions.
    pub us_to_isns: f64,
    /// Instructions plus interrupt offset, in microseconds.
    pub offset_isns_to_us: f64,
    /// Microseconds in instructions, minus interrupt offset.
    pub offset_us_to_isns: f64,
}

impl SpanReport {
    /// Compute all four conversions of `value`.
    #[must_use]
    pub fn new(value: f64, timebase: &Timebase) -> Self {
        Self {
            isns_to_us: timebase.isns_to_us(value),
            us_to_isns: timebase.us_to_isns(value),
            offset_isns_to_us: timebase.isns_to_us_with_offset(value),
            offset_us_to_isns: timebase.us_to_isns_with_offset(value),
        }
    }
}

/// Output of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Exactly one value was given.
    Span(SpanReport),
    /// Offset-corrected milliseconds, one per input value, in input order.
    Batch(Vec<f64>),
}

impl Report {
    /// Select the report mode from the number of values and compute it.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::MissingArgument`] if `values` is empty.
    pub fn build(values: &[f64], timebase: &Timebase) -> TimeResult<Self> {
        match values {
            [] => Err(TimeError::MissingArgument),
            [value] => Ok(Self::Span(SpanReport::new(*value, timebase))),
            _ => Ok(Self::Batch(
                values
                    .iter()
                    .map(|value| timebase.isns_to_ms_with_offset(*value))
                    .collect(),
            )),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Span(span) => {
                writeln!(f, "Time span")?;
                writeln!(f, "ISNS -> µs {} us", Fixed2(span.isns_to_us))?;
                writeln!(f, "µs -> ISNS {}", Fixed2(span.us_to_isns))?;
                writeln!(f, "Interrupt offset")?;
                writeln!(f, "ISNS -> µs {} us", Fixed2(span.offset_isns_to_us))?;
                writeln!(f, "µs -> ISNS {}", Fixed2(span.offset_us_to_isns))
            }
            Self::Batch(millis) => {
                for ms in millis {
                    writeln!(f, "{}", Fixed2(*ms))?;
                }
                Ok(())
            }
        }
    }
}

/// Fixed-point, two decimals. NaN prints as `nan`, matching `inf`.
struct Fixed2(f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}
