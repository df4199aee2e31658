use serde_json::Value;

/// The kinds of cell the cleaner knows how to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
    Other,
}

impl CellKind {
    pub fn of(cell: &Value) -> Self {
        match cell.get("cell_type").and_then(Value::as_str) {
            Some("code") => CellKind::Code,
            Some("markdown") => CellKind::Markdown,
            _ => CellKind::Other,
        }
    }
}

/// Read a cell `source` as a list of lines.
///
/// nbformat allows either a list of strings or one multi-line string. A string
/// is split after every newline, so only the last line may lack one. Anything
/// else yields `None` and the cell is left alone.
pub fn source_lines(source: &Value) -> Option<Vec<String>> {
    match source {
        Value::String(text) => Some(text.split_inclusive('\n').map(str::to_string).collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

pub fn lines_to_value(lines: Vec<String>) -> Value {
    Value::Array(lines.into_iter().map(Value::String).collect())
}
