//! Metadata header assembly for index data files.
//!
//! Definition lines are consumed in two stages: the first carries the total
//! declared field count, each following line declares one field as its last
//! four whitespace-separated tokens (name, type tag, width, decimal length).

use std::collections::HashSet;

use crate::app::models::{FieldSpec, Schema};
use crate::constants::DEFINITION_LINE_START;
use crate::{Error, Result};

/// Incremental builder for the declared schema
///
/// Fed one definition line at a time until the collected field count
/// reaches the declared total; the finished schema is immutable.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    declared_count: Option<usize>,
    fields: Vec<FieldSpec>,
    seen_names: HashSet<String>,
}

impl SchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any definition line has been consumed yet
    pub fn started(&self) -> bool {
        self.declared_count.is_some()
    }

    /// Whether the collected fields have reached the declared total
    pub fn is_complete(&self) -> bool {
        self.declared_count == Some(self.fields.len())
    }

    /// The declared total field count, once stage 1 has run
    pub fn declared_count(&self) -> Option<usize> {
        self.declared_count
    }

    /// Number of field declarations collected so far
    pub fn fields_collected(&self) -> usize {
        self.fields.len()
    }

    /// Consume one definition line.
    ///
    /// The first line establishes the declared field count; each later
    /// line appends one field spec built from its last four tokens.
    pub fn ingest(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        let body = trimmed
            .strip_prefix(DEFINITION_LINE_START)
            .unwrap_or(trimmed);
        let tokens: Vec<&str> = body.split_whitespace().collect();

        match self.declared_count {
            None => {
                let token = tokens.first().ok_or_else(|| {
                    Error::metadata("definition line declares no field count".to_string())
                })?;
                let count = token.parse::<usize>().map_err(|_| {
                    Error::metadata(format!("field count token '{}' is not an integer", token))
                })?;
                self.declared_count = Some(count);
            }
            Some(count) => {
                if tokens.len() < 4 {
                    return Err(Error::metadata(format!(
                        "definition line needs name, type, width and decimal length: {}",
                        line.trim()
                    )));
                }

                let tail = &tokens[tokens.len() - 4..];
                let name = tail[0];
                let type_tag = tail[1];
                let width = tail[2].parse::<usize>().map_err(|_| {
                    Error::metadata(format!(
                        "field width token '{}' is not an integer for field '{}'",
                        tail[2], name
                    ))
                })?;
                let decimal_len = tail[3].parse::<usize>().map_err(|_| {
                    Error::metadata(format!(
                        "decimal length token '{}' is not an integer for field '{}'",
                        tail[3], name
                    ))
                })?;

                if !self.seen_names.insert(name.to_string()) {
                    return Err(Error::metadata(format!(
                        "field '{}' is declared more than once",
                        name
                    )));
                }
                if self.fields.len() >= count {
                    return Err(Error::metadata(format!(
                        "more field declarations than the declared count of {}",
                        count
                    )));
                }

                self.fields.push(FieldSpec::new(name, type_tag, width, decimal_len));
            }
        }

        Ok(())
    }

    /// Produce the finished schema.
    ///
    /// Fails when the header never declared a field count or ended before
    /// the declared number of fields was collected.
    pub fn finish(&self) -> Result<Schema> {
        match self.declared_count {
            None => Err(Error::metadata(
                "no field definitions found before data".to_string(),
            )),
            Some(count) if count != self.fields.len() => Err(Error::metadata(format!(
                "header declared {} fields but only {} were defined",
                count,
                self.fields.len()
            ))),
            Some(_) => Ok(Schema::new(self.fields.clone())),
        }
    }
}
