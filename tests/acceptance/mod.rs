//! Acceptance test modules.

mod common;
mod converter_test;
