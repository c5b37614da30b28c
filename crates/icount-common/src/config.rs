//! Timebase configuration.
//!
//! Defaults match the fuzzing targets (`-icount shift=5`). Embedders can carry
//! a `[timebase]`-style table in their own TOML and hand it to
//! [`TimebaseConfig::from_toml_str`].

use serde::{Deserialize, Serialize};

use crate::time::{Timebase, INT_OFFSET, QEMU_SHIFT};

/// Serializable form of a [`Timebase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimebaseConfig {
    /// QEMU `-icount shift` value.
    pub qemu_shift: u32,

    /// Interrupt-handling offset in instructions.
    pub interrupt_offset: f64,
}

impl Default for TimebaseConfig {
    fn default() -> Self {
        Self {
            qemu_shift: QEMU_SHIFT,
            interrupt_offset: INT_OFFSET,
        }
    }
}

impl TimebaseConfig {
    /// Parse configuration from a TOML string. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the values are out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable timebase.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timebase().map(|_| ())
    }

    /// Build the [`Timebase`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`validate`](Self::validate).
    pub fn timebase(&self) -> Result<Timebase, ConfigError> {
        let timebase = Timebase::new(self.qemu_shift, self.interrupt_offset)?;
        tracing::debug!(
            shift = timebase.shift(),
            offset = timebase.interrupt_offset(),
            "Timebase configured"
        );
        Ok(timebase)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Shift too large for a `u32` instruction period.
    #[error("invalid icount shift {shift} (maximum {max})")]
    InvalidShift {
        /// Rejected shift.
        shift: u32,
        /// Largest accepted shift.
        max: u32,
    },

    /// Offset is NaN or infinite.
    #[error("invalid interrupt offset {0}")]
    InvalidOffset(f64),

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
