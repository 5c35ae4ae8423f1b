//! Core index file parser implementation
//!
//! This module provides the main scan orchestration: line classification in
//! priority order, metadata assembly, record accumulation, and finalization
//! of the decoded result table.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::field_parsers;
use super::header::SchemaBuilder;
use super::record_parser::{is_record_line, parse_record_line};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Column, IndexTable, Schema, Value};
use crate::config::ReadOptions;
use crate::constants::{
    COMMENT_LINE_START, DEFINITION_LINE_START, EOD_LINE_START, LEGACY_LINE_START,
};
use crate::{Error, Result};

/// Parser for MSCI daily index data files
///
/// Each parse invocation owns its own schema and record accumulators, so
/// one parser can serve independent calls over independent inputs. Lines
/// are classified in priority order: end-of-data, comment, legacy header,
/// definition, then candidate data record.
#[derive(Debug, Clone, Default)]
pub struct IndexFileParser {
    options: ReadOptions,
}

impl IndexFileParser {
    /// Create a parser with default options (`|` delimiter, coercion on)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with validated custom options
    pub fn with_options(options: ReadOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this parser runs with
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Whether a line is the end-of-data marker
    pub fn is_eod_line(line: &str) -> bool {
        line.starts_with(EOD_LINE_START)
    }

    /// Whether a line is a comment
    pub fn is_comment_line(line: &str) -> bool {
        line.starts_with(COMMENT_LINE_START)
    }

    /// Whether a line is a definition (metadata) line
    pub fn is_definition_line(line: &str) -> bool {
        line.starts_with(DEFINITION_LINE_START)
    }

    /// Whether a line is a legacy header, skipped for backward compatibility
    pub fn is_legacy_header(line: &str) -> bool {
        line.starts_with(LEGACY_LINE_START)
    }

    /// Parse an index data file from disk
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing index file: {}", path.display());

        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open file {}", path.display()), e))?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse an index data file from an open line source
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        self.scan(reader.lines())
    }

    /// Parse index data held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.scan(content.lines().map(|line| Ok(line.to_string())))
    }

    /// Sequential single-pass scan over the line source
    fn scan<I>(&self, lines: I) -> Result<ParseResult>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let delimiter = self.options.delimiter;
        let mut builder = SchemaBuilder::new();
        let mut schema: Option<Schema> = None;
        let mut records: Vec<Vec<Option<String>>> = Vec::new();
        let mut stats = ParseStats::new();

        for line in lines {
            let line = line?;
            stats.lines_scanned += 1;

            if Self::is_eod_line(&line) {
                stats.eod_seen = true;
                break;
            }
            if Self::is_comment_line(&line) || Self::is_legacy_header(&line) {
                stats.lines_skipped += 1;
                continue;
            }
            if Self::is_definition_line(&line) {
                if schema.is_some() {
                    // Metadata is complete; surplus definition lines carry nothing
                    stats.lines_skipped += 1;
                } else {
                    builder.ingest(&line)?;
                    stats.definition_lines += 1;
                    if builder.is_complete() {
                        let assembled = builder.finish()?;
                        debug!(
                            "Metadata complete: {} fields declared",
                            assembled.field_count()
                        );
                        schema = Some(assembled);
                    }
                }
                continue;
            }

            if is_record_line(&line, delimiter) {
                let schema = schema.as_ref().ok_or_else(|| {
                    if builder.started() {
                        Error::metadata(format!(
                            "data record encountered after {} of {} field definitions",
                            builder.fields_collected(),
                            builder.declared_count().unwrap_or(0)
                        ))
                    } else {
                        Error::metadata(
                            "data record encountered before any field definitions".to_string(),
                        )
                    }
                })?;

                records.push(parse_record_line(&line, delimiter, schema.field_count())?);
                stats.records_parsed += 1;
            } else {
                debug!("Dropping unrecognized line: {}", line.trim());
                stats.lines_skipped += 1;
            }
        }

        let schema = match schema {
            Some(schema) => schema,
            // A started but unfinished header is fatal; marker-only input
            // yields an empty table
            None if builder.started() => builder.finish()?,
            None => Schema::default(),
        };

        let table = self.build_table(&schema, &records)?;

        info!(
            "Parsed {} records into {} columns ({} lines scanned, {} skipped)",
            table.row_count(),
            table.column_count(),
            stats.lines_scanned,
            stats.lines_skipped
        );

        Ok(ParseResult {
            schema,
            table,
            stats,
        })
    }

    /// Assemble the result table, coercing cells unless raw strings were
    /// requested
    fn build_table(
        &self,
        schema: &Schema,
        records: &[Vec<Option<String>>],
    ) -> Result<IndexTable> {
        let mut columns = Vec::with_capacity(schema.field_count());

        for (index, spec) in schema.fields().iter().enumerate() {
            let mut values = Vec::with_capacity(records.len());
            for record in records {
                let cell = match &record[index] {
                    None => None,
                    Some(raw) if self.options.parse_values => {
                        Some(field_parsers::decode_value(spec, raw)?)
                    }
                    Some(raw) => Some(Value::String(raw.clone())),
                };
                values.push(cell);
            }
            columns.push(Column::new(spec.name.clone(), values));
        }

        IndexTable::new(columns)
    }
}
