//! Scan statistics and result structure for index file parsing.

use crate::app::models::{IndexTable, Schema};

/// Parse result: the declared schema, the decoded table and scan statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Schema assembled from the metadata header
    pub schema: Schema,

    /// Decoded tabular data, columns in declaration order
    pub table: IndexTable,

    /// Scan statistics
    pub stats: ParseStats,
}

/// Counters describing one scan of the input
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines read from the source, including the EOD line when present
    pub lines_scanned: usize,

    /// Definition lines consumed into the schema
    pub definition_lines: usize,

    /// Data records accepted into the table
    pub records_parsed: usize,

    /// Comment, legacy-header, surplus-definition and unrecognized lines
    pub lines_skipped: usize,

    /// Whether scanning stopped at an end-of-data marker
    pub eod_seen: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            definition_lines: 0,
            records_parsed: 0,
            lines_skipped: 0,
            eod_seen: false,
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
