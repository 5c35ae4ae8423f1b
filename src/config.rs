//! Reader configuration and validation.
//!
//! Provides the options accepted by [`IndexFileParser`](crate::IndexFileParser):
//! the record delimiter and whether decoded values are type-coerced.

use crate::constants::{COMMENT_LINE_START, DEFAULT_DELIMITER, DEFINITION_LINE_START};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options controlling a single parse invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Field delimiter for record lines (default `|`)
    pub delimiter: char,

    /// Coerce cell values to their declared types; when `false` every
    /// present cell is returned as a raw trimmed string
    pub parse_values: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            parse_values: true,
        }
    }
}

impl ReadOptions {
    /// Options with a non-default delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }

    /// Disable type coercion, keeping all present cells as raw strings
    pub fn raw_strings(mut self) -> Self {
        self.parse_values = false;
        self
    }

    /// Validate the options for consistency
    ///
    /// The delimiter must not collide with the reserved line markers and
    /// must not be whitespace, otherwise line classification is ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_whitespace() {
            return Err(Error::configuration(
                "delimiter must not be a whitespace character".to_string(),
            ));
        }

        let delimiter = self.delimiter.to_string();
        if delimiter == DEFINITION_LINE_START || delimiter == COMMENT_LINE_START {
            return Err(Error::configuration(format!(
                "delimiter '{}' collides with a reserved line marker",
                self.delimiter
            )));
        }

        Ok(())
    }
}
