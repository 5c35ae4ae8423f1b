//! MSCI Index File Reader
//!
//! A Rust library and CLI for reading MSCI daily index data files in the
//! vendor's custom line-oriented format into typed tabular data.
//!
//! This library provides tools for:
//! - Parsing the self-describing metadata header (field names, type tags,
//!   widths, decimal precision) that prefixes every file
//! - Decoding delimiter-separated data records against the declared schema
//! - Per-field type coercion into string, integer, float or date values with
//!   explicit absent-value handling
//! - Exporting the decoded table as CSV or JSON from the command line
//! - Comprehensive error handling with diagnostic context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod index_file_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldKind, FieldSpec, IndexTable, Schema, Value};
pub use app::services::index_file_parser::{IndexFileParser, ParseResult, ParseStats};
pub use config::ReadOptions;

/// Result type alias for the MSCI index file reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for index file reading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// A data record's token count does not match the declared field count
    #[error("expecting {expected} fields, but getting {actual} values: {line}")]
    RecordLayout {
        expected: usize,
        actual: usize,
        line: String,
    },

    /// Metadata header is malformed or incomplete
    #[error("metadata error: {message}")]
    Metadata { message: String },

    /// A cell value failed its column's decode function
    #[error("decode error in column '{column}': cannot decode '{value}' ({message})")]
    Decode {
        column: String,
        value: String,
        message: String,
    },

    /// Reader options are invalid
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Writing converted output failed
    #[error("output error: {message}")]
    Output { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a record layout error citing expected vs. actual token counts
    pub fn record_layout(expected: usize, actual: usize, line: impl Into<String>) -> Self {
        Self::RecordLayout {
            expected,
            actual,
            line: line.into(),
        }
    }

    /// Create a metadata error
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a decode error for a column/value pair
    pub fn decode(
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Decode {
            column: column.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Output {
            message: format!("CSV writing failed: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Output {
            message: format!("JSON writing failed: {}", error),
        }
    }
}
