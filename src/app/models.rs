//! Core data models for index file parsing.
//!
//! Defines the declared schema (field specifications and their decode
//! kinds), the typed cell values, and the column-ordered result table
//! produced by a parse.

use chrono::NaiveDateTime;

use crate::constants::INTEGER_FIELD_MAX_WIDTH;
use crate::{Error, Result};

/// Decode behavior of a declared field, selected from its type tag,
/// width and decimal length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Identity string decode (type tag `S`)
    String,
    /// Integer decode (type tag `N`, no decimals, narrow width)
    Integer,
    /// Floating-point decode (type tag `N` with decimals or wide width)
    Float,
    /// Calendar date/time decode (type tag `D`)
    Date,
    /// Unknown type tag; decoded as a string
    Fallback,
}

impl FieldKind {
    /// Select the decode kind for a declared field.
    ///
    /// Numeric fields decode as floats when they carry decimals or are
    /// declared wider than an integer can be trusted to hold, otherwise
    /// as integers. Unknown type tags fall back to the string decode.
    pub fn for_declaration(type_tag: &str, width: usize, decimal_len: usize) -> Self {
        match type_tag {
            "S" => FieldKind::String,
            "N" => {
                if decimal_len > 0 || width > INTEGER_FIELD_MAX_WIDTH {
                    FieldKind::Float
                } else {
                    FieldKind::Integer
                }
            }
            "D" => FieldKind::Date,
            _ => FieldKind::Fallback,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Date => "date",
            FieldKind::Fallback => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// One declared attribute of the file: name, decode kind and the
/// declared width/decimal length it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub width: usize,
    pub decimal_len: usize,
}

impl FieldSpec {
    /// Build a field spec from the raw declaration tokens
    pub fn new(name: impl Into<String>, type_tag: &str, width: usize, decimal_len: usize) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::for_declaration(type_tag, width, decimal_len),
            width,
            decimal_len,
        }
    }
}

/// Ordered, immutable sequence of field specifications
///
/// Built once per parse while the metadata header is read, then only
/// consulted during record decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema from fields in declaration order
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A decoded cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDateTime),
}

impl Value {
    /// Borrow the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The float content, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The date content, if this is a date value
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One named column of the result table; absent cells are `None`
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<Value>>,
}

impl Column {
    /// Create a column from its name and cell values
    pub fn new(name: impl Into<String>, values: Vec<Option<Value>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column-ordered tabular parse result
///
/// Columns follow field declaration order; rows follow record arrival
/// order. All columns hold the same number of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexTable {
    columns: Vec<Column>,
}

impl IndexTable {
    /// Create a table from equally sized columns
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let rows = first.values.len();
            for column in &columns {
                if column.values.len() != rows {
                    return Err(Error::metadata(format!(
                        "column '{}' holds {} cells, expected {}",
                        column.name,
                        column.values.len(),
                        rows
                    )));
                }
            }
        }
        Ok(Self { columns })
    }

    /// Table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cells of one row in column order
    pub fn row(&self, index: usize) -> Option<Vec<Option<&Value>>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[index].as_ref())
                .collect(),
        )
    }
}
