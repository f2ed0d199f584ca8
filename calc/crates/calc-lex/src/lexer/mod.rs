//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `symbol` - Single-character symbol lexing

mod core;
mod identifier;
mod number;
mod symbol;

pub use core::Lexer;
