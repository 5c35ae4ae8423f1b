//! Shared components for CLI commands
//!
//! Logging setup and cell rendering helpers used by the convert and
//! inspect commands.

use serde_json::json;

use crate::app::models::{IndexTable, Value};
use crate::Result;

/// Set up structured logging at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("msci_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();

    Ok(())
}

/// Render one cell for CSV output; absent cells render as the empty string
pub fn render_cell(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

/// Render one cell as JSON; absent cells render as null
pub fn cell_to_json(value: Option<&Value>) -> serde_json::Value {
    match value {
        None => serde_json::Value::Null,
        Some(Value::String(s)) => json!(s),
        Some(Value::Integer(n)) => json!(n),
        Some(Value::Float(x)) => json!(x),
        Some(Value::Date(d)) => json!(d.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Render the table as an array of row objects keyed by column name
pub fn table_to_json(table: &IndexTable) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = (0..table.row_count())
        .map(|index| {
            let cells: serde_json::Map<String, serde_json::Value> = table
                .columns()
                .iter()
                .map(|column| (column.name.clone(), cell_to_json(column.values[index].as_ref())))
                .collect();
            serde_json::Value::Object(cells)
        })
        .collect();

    serde_json::Value::Array(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Column;

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(Some(&Value::Integer(42))), "42");
        assert_eq!(render_cell(Some(&Value::String("AAA".to_string()))), "AAA");
        assert_eq!(render_cell(None), "");
    }

    #[test]
    fn test_cell_to_json() {
        assert_eq!(cell_to_json(None), serde_json::Value::Null);
        assert_eq!(cell_to_json(Some(&Value::Integer(7))), json!(7));
        assert_eq!(cell_to_json(Some(&Value::Float(1.5))), json!(1.5));
    }

    #[test]
    fn test_table_to_json() {
        let table = IndexTable::new(vec![
            Column::new("NAME", vec![Some(Value::String("AAA".to_string()))]),
            Column::new("VALUE", vec![None]),
        ])
        .unwrap();

        let rendered = table_to_json(&table);
        assert_eq!(rendered, json!([{"NAME": "AAA", "VALUE": null}]));
    }
}
