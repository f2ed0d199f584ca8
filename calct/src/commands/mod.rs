//! Command modules for the calct CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod tokenize;
