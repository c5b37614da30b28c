//! QEMU icount timebase.
//!
//! With `-icount shift=N` QEMU advances virtual time by `2^N` ns per executed
//! instruction. All conversions here derive from that shift plus a fixed
//! interrupt-handling offset measured in instructions.

use std::time::Duration;

use crate::config::ConfigError;

/// Default icount shift used by the fuzzing targets.
pub const QEMU_SHIFT: u32 = 5;

/// Largest shift accepted by [`Timebase::new`].
pub const MAX_SHIFT: u32 = 30;

/// Nanoseconds of virtual time per instruction at [`QEMU_SHIFT`].
pub const QEMU_NS_PER_ISN: u64 = 1 << QEMU_SHIFT;

/// Instructions per second of virtual time at [`QEMU_SHIFT`].
pub const QEMU_ISNS_PER_SEC: u64 = 1_000_000_000 / QEMU_NS_PER_ISN;

/// Instructions per millisecond of virtual time at [`QEMU_SHIFT`].
pub const QEMU_ISNS_PER_MSEC: u64 = QEMU_ISNS_PER_SEC / 1000;

/// Instructions per microsecond at [`QEMU_SHIFT`] (31.25).
#[allow(clippy::cast_precision_loss)]
pub const ISNS_PER_US: f64 = 1000.0 / QEMU_NS_PER_ISN as f64;

/// Instructions spent in interrupt handling before the measured section starts.
pub const INT_OFFSET: f64 = 53_430.0;

/// Conversion parameters between instruction counts and wall-clock units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timebase {
    shift: u32,
    interrupt_offset: f64,
}

impl Default for Timebase {
    fn default() -> Self {
        Self {
            shift: QEMU_SHIFT,
            interrupt_offset: INT_OFFSET,
        }
    }
}

impl Timebase {
    /// Create a timebase for the given icount shift and interrupt offset.
    ///
    /// # Errors
    ///
    /// Returns an error if `shift` exceeds [`MAX_SHIFT`] or the offset is not finite.
    pub fn new(shift: u32, interrupt_offset: f64) -> Result<Self, ConfigError> {
        if shift > MAX_SHIFT {
            return Err(ConfigError::InvalidShift { shift, max: MAX_SHIFT });
        }
        if !interrupt_offset.is_finite() {
            return Err(ConfigError::InvalidOffset(interrupt_offset));
        }
        Ok(Self {
            shift,
            interrupt_offset,
        })
    }

    /// The icount shift.
    #[must_use]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// The interrupt offset in instructions.
    #[must_use]
    pub const fn interrupt_offset(&self) -> f64 {
        self.interrupt_offset
    }

    /// Nanoseconds of virtual time per instruction.
    #[must_use]
    pub const fn ns_per_isn(&self) -> u64 {
        1 << self.shift
    }

    /// Instructions per microsecond.
    #[must_use]
    pub fn isns_per_us(&self) -> f64 {
        1000.0 / f64::from(1u32 << self.shift)
    }

    /// Instructions to microseconds.
    #[must_use]
    pub fn isns_to_us(&self, isns: f64) -> f64 {
        isns / self.isns_per_us()
    }

    /// Microseconds to instructions.
    #[must_use]
    pub fn us_to_isns(&self, us: f64) -> f64 {
        us * self.isns_per_us()
    }

    /// Instructions to microseconds, including the interrupt offset.
    #[must_use]
    pub fn isns_to_us_with_offset(&self, isns: f64) -> f64 {
        (isns + self.interrupt_offset) / self.isns_per_us()
    }

    /// Microseconds to instructions, with the interrupt offset removed.
    #[must_use]
    pub fn us_to_isns_with_offset(&self, us: f64) -> f64 {
        us * self.isns_per_us() - self.interrupt_offset
    }

    /// Instructions to milliseconds, including the interrupt offset.
    #[must_use]
    pub fn isns_to_ms_with_offset(&self, isns: f64) -> f64 {
        (isns + self.interrupt_offset) / (self.isns_per_us() * 1000.0)
    }

    /// Virtual time covered by `ticks` instructions. Saturates on overflow.
    #[must_use]
    pub fn ticks_to_duration(&self, ticks: u64) -> Duration {
        Duration::from_nanos(ticks.saturating_mul(self.ns_per_isn()))
    }

    /// Number of whole instructions executed in `time`. Saturates at `u64::MAX`.
    #[must_use]
    pub fn duration_to_ticks(&self, time: Duration) -> u64 {
        u64::try_from(time.as_nanos() / u128::from(self.ns_per_isn())).unwrap_or(u64::MAX)
    }

    /// Milliseconds covered by `ticks`, rounded to two decimals.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ticks_to_ms(&self, ticks: u64) -> f64 {
        let micros = self.ticks_to_duration(ticks).as_micros() as f64;
        (micros / 10.0).round() / 100.0
    }
}
