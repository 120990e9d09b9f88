use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Columns pinned to the left of entry tables, in this order.
const LEADING_COLUMNS: [&str; 2] = ["id", "name"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table(value: Value) -> anyhow::Result<String> {
    let options = TableOptions::from_env();
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(render_table(&["value"], &[vec![value_to_cell(&scalar)]], options)),
    }
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let headers = collect_headers(items);
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&header_refs, &rows, options)
}

/// Union of keys across rows: `id` and `name` first, the rest sorted.
fn collect_headers(items: &[Value]) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    let mut leading = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            let bucket = if LEADING_COLUMNS.contains(&key.as_str()) {
                &mut leading
            } else {
                &mut rest
            };
            if !bucket.contains(key) {
                bucket.push(key.clone());
            }
        }
    }

    leading.sort_by_key(|key| LEADING_COLUMNS.iter().position(|c| *c == key.as_str()));
    rest.sort();
    leading.extend(rest);
    leading
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_render_is_pretty() {
        let out = render(&json!([{"id": 3, "name": "A"}]), OutputFormat::Json).unwrap();
        assert!(out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["id"], 3);
    }

    #[test]
    fn raw_render_is_single_line() {
        let out = render(&json!([{"id": 3, "name": "A"}]), OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"[{"id":3,"name":"A"}]"#);
    }

    #[test]
    fn entry_table_pins_id_and_name_first() {
        let items = [
            json!({"payload_url": "p1.txt", "name": "x", "id": 1}),
            json!({"id": 2, "minor_iov": 40}),
        ];
        assert_eq!(
            collect_headers(&items),
            vec!["id", "name", "minor_iov", "payload_url"]
        );
    }

    #[test]
    fn table_render_of_entries_has_one_row_per_entry() {
        let out = render(
            &json!([{"id": 3, "name": "A"}, {"id": 7, "name": "A"}]),
            OutputFormat::Table,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[3].contains('7'));
    }

    #[test]
    fn table_render_of_empty_list() {
        let out = render(&json!([]), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_render_of_object_is_key_value() {
        let out = render(&json!({"tag": 5, "payload": 8}), OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("payload"));
    }
}
