//! CLI support for jsemit
//!
//! Provides programmatic access to the jsemit commands so they can be
//! embedded in other tools.

mod convert;
mod quote;

pub use convert::{ConvertOptions, execute_convert};
pub use quote::{QuoteMode, QuoteOptions, execute_quote};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Invalid name passed on the command line
    Build(crate::BuildError),
    /// Value conversion error
    Convert(crate::ConvertError),
    /// Rendering error
    Render(crate::RenderError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Build(e) => write!(f, "Invalid argument: {}", e),
            CliError::Convert(e) => write!(f, "Conversion failed: {}", e),
            CliError::Render(e) => write!(f, "Render failed: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Build(e) => Some(e),
            CliError::Convert(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<crate::BuildError> for CliError {
    fn from(e: crate::BuildError) -> Self {
        CliError::Build(e)
    }
}

impl From<crate::ConvertError> for CliError {
    fn from(e: crate::ConvertError) -> Self {
        CliError::Convert(e)
    }
}

impl From<crate::RenderError> for CliError {
    fn from(e: crate::RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
