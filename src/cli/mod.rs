//! CLI module for heapsched - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for replaying the
//! built-in demo trace or a trace script from disk.

pub mod commands;

pub use commands::Cli;
