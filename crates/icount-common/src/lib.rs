#![doc = "Timebase types shared by the QEMU icount tools."]

pub mod config;
pub mod error;
pub mod time;

pub use config::*;
pub use error::*;
pub use time::*;
