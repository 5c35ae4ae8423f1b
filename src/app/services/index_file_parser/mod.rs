//! Parser for MSCI daily index data files in the vendor's custom format
//!
//! This module implements the two-phase reader: a self-describing metadata
//! header declaring the fields is consumed first, then each data record is
//! decoded against the assembled schema with per-field type coercion.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core scan orchestration, line classification and file handling
//! - [`header`] - Two-stage metadata assembly into a [`Schema`](crate::Schema)
//! - [`record_parser`] - Record-line tokenisation and arity checking
//! - [`field_parsers`] - Per-kind cell decoding (string, integer, float, date)
//! - [`stats`] - Scan statistics and the parse result structure
//!
//! ## Usage
//!
//! ```rust
//! use msci_reader::IndexFileParser;
//!
//! # fn example() -> msci_reader::Result<()> {
//! let parser = IndexFileParser::new();
//! let result = parser.parse_file(std::path::Path::new("data.txt"))?;
//!
//! println!(
//!     "Parsed {} rows across {} columns",
//!     result.table.row_count(),
//!     result.table.column_count()
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::SchemaBuilder;
pub use parser::IndexFileParser;
pub use stats::{ParseResult, ParseStats};
