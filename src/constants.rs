//! Application constants for the MSCI index file reader
//!
//! This module contains the reserved line-marker tokens of the vendor
//! format, default reader settings, and the type-coercion rules shared
//! across the parser.

// =============================================================================
// Line Markers
// =============================================================================

/// End-of-data marker; no further lines are read once it is seen
pub const EOD_LINE_START: &str = "#EOD";

/// Comment line prefix
pub const COMMENT_LINE_START: &str = "*";

/// Definition (metadata) line prefix
pub const DEFINITION_LINE_START: &str = "#";

/// Legacy header prefix, kept for older file variants; carries no data
pub const LEGACY_LINE_START: &str = "SS";

// =============================================================================
// Reader Defaults
// =============================================================================

/// Default field delimiter for record lines
pub const DEFAULT_DELIMITER: char = '|';

// =============================================================================
// Type Coercion
// =============================================================================

/// Widest numeric field still decoded as an integer when it has no decimals.
/// Wider declarations decode as floating point.
pub const INTEGER_FIELD_MAX_WIDTH: usize = 10;

/// Accepted textual datetime representations, tried in order
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y%m%d %H:%M:%S",
];

/// Accepted textual date representations, tried after the datetime forms
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y", "%d-%b-%Y"];
