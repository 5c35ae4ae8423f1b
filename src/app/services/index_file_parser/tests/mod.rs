//! Test fixtures and helpers for index file parser testing

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod field_parser_tests;
mod header_tests;

/// Helper to create complete index file content covering every line type
pub fn create_test_index_content() -> String {
    r#"*Extract of daily index data
SS20230131
#4
#  1  INDEX_NAME   S  40  0
#  2  PRICE        N  12  4
#  3  COUNT        N  5   0
#  4  ASOF_DATE    D  10  0
|USA STANDARD|1234.5678|25|2023-01-31|
|EAFE| |42|2023-02-01|
#EOD
|POST EOD|1.0|1|2023-03-01|"#
        .to_string()
}

/// Helper to create minimal index file content: two fields, one record
pub fn create_minimal_index_content() -> String {
    r#"#2
# 1 NAME  S 20 0
# 2 VALUE N 5  0
|AAA|123|"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
