use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_rows(items)),
        // List responses: the items as rows, the counters as a footer.
        Value::Object(map) if map.get("items").is_some_and(Value::is_array) => {
            let items = map["items"].as_array().map_or(&[][..], Vec::as_slice);
            Ok(format!("{}\n{}", render_rows(items), list_footer(map)))
        }
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }
    // `id` first, the rest alphabetical.
    headers.sort_by_key(|header| (*header != "id", *header));

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(*header).map_or_else(|| "-".to_string(), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&headers, &rows, table_options())
}

fn list_footer(map: &Map<String, Value>) -> String {
    let field = |key: &str| map.get(key).map_or_else(|| "?".to_string(), value_to_cell);
    let mut footer = format!(
        "page {} of {}, {} total",
        field("page"),
        field("total_pages"),
        field("total_count")
    );
    if map.get("has_more").and_then(Value::as_bool) == Some(true) {
        footer.push_str(" (more available)");
    }
    footer
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
