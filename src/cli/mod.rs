//! Command-line driver
//!
//! Owns all terminal output; the `crypto` module never prints.

pub mod commands;

pub use commands::{
    cmd_demo, cmd_hash, cmd_keygen, cmd_validate, CliResult, DemoReport, HashReport, KeyReport,
    ValidationReport, DEFAULT_MESSAGE,
};
