use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

const MAX_CELL_CHARS: usize = 60;

// -- Column and row builders --

/// Columns to show: the selection if one was given, otherwise every key in
/// order of first appearance. Records that are not objects get a single
/// `value` column.
fn record_columns(records: &[Value], selected: &[String]) -> Vec<String> {
    if !selected.is_empty() {
        return selected.to_vec();
    }
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        match record {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }
            _ => {
                if !columns.iter().any(|c| c == "value") {
                    columns.push("value".to_string());
                }
            }
        }
    }
    columns
}

fn build_rows(records: &[Value], columns: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| match record {
                    Value::Object(map) => map.get(column).map(format_cell).unwrap_or_default(),
                    other if column == "value" => format_cell(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect()
}

fn build_table(records: &[Value], selected: &[String]) -> Table {
    let columns = record_columns(records, selected);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in build_rows(records, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

fn format_cell(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match text.char_indices().nth(MAX_CELL_CHARS) {
        None => text,
        Some((end, _)) => format!("{}...", &text[..end]),
    }
}

// -- Table output --

pub fn print_records_table(records: &[Value], columns: &[String]) {
    println!("{}", build_table(records, columns));
}

// -- Markdown output --

pub fn print_records_markdown(records: &[Value], columns: &[String]) {
    let mut table = build_table(records, columns);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn periods() -> Vec<Value> {
        vec![
            json!({"id": 32, "kode": "20031", "titel": "2003-04 (1. samling)", "slutdato": null}),
            json!({"id": 33, "kode": "20041", "type": "samling"}),
        ]
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_name("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_record_columns_union() {
        let columns = record_columns(&periods(), &[]);
        assert_eq!(columns.len(), 5);
        for key in ["id", "kode", "titel", "slutdato", "type"] {
            assert!(columns.iter().any(|c| c == key), "missing {}", key);
        }
    }

    #[test]
    fn test_record_columns_selection_wins() {
        let selected = vec!["titel".to_string(), "id".to_string()];
        assert_eq!(record_columns(&periods(), &selected), selected);
    }

    #[test]
    fn test_build_rows_fills_missing_cells() {
        let columns = vec!["id".to_string(), "type".to_string(), "slutdato".to_string()];
        let rows = build_rows(&periods(), &columns);
        assert_eq!(rows[0], vec!["32", "", ""]);
        assert_eq!(rows[1], vec!["33", "samling", ""]);
    }

    #[test]
    fn test_scalar_records_use_value_column() {
        let records = vec![json!(1), json!("to"), json!(3.5)];
        let columns = record_columns(&records, &[]);
        assert_eq!(columns, vec!["value"]);
        let rows = build_rows(&records, &columns);
        assert_eq!(rows, vec![vec!["1"], vec!["to"], vec!["3.5"]]);
    }

    #[test]
    fn test_format_cell_truncates_long_text() {
        let long = json!("æ".repeat(100));
        let cell = format_cell(&long);
        assert!(cell.ends_with("..."));
        assert_eq!(cell.chars().count(), MAX_CELL_CHARS + 3);
    }

    #[test]
    fn test_markdown_table_has_header() {
        let mut table = build_table(&periods(), &["id".to_string(), "kode".to_string()]);
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.contains("| id"));
        assert!(rendered.contains("20041"));
    }
}
