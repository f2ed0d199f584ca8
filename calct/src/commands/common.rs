//! Common types and utilities for calct commands.
//!
//! This module provides shared types and message templates used across
//! command implementations.

use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for the tokenize command.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human readable line per token
    #[default]
    Text,
    /// A JSON array of spanned tokens per expression
    Json,
}

impl OutputFormat {
    /// Get the name used on the command line and in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
///
/// The offending path or count is appended by the caller.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when unknown tokens were found and the run must fail.
    pub const UNKNOWN_TOKENS: &str = "unknown token(s) found:";
}
