//! Jupyter notebook documents, kept as JSON so unknown fields survive untouched.

mod cell;

use std::string::FromUtf8Error;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use thiserror::Error;
use tracing::debug;

use crate::parser::strip_comments;
use crate::text::{apply_substitutions, clean_markdown_line, Substitution};

pub use cell::{lines_to_value, source_lines, CellKind};

/// nbformat writes one-space indentation.
const INDENT: &[u8] = b" ";

#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("malformed JSON (NaN and Infinity are not supported): {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("`cells` is not an array")]
    CellsNotArray,
    #[error("serialized notebook is not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

#[derive(Debug, Clone)]
pub struct Notebook {
    root: Value,
}

impl Notebook {
    /// Parse notebook JSON. Numbers keep their written form.
    ///
    /// Strict JSON only: bare `NaN` and `Infinity` literals, which Python's
    /// `json` module accepts, are rejected as [`NotebookError::Json`].
    pub fn parse(text: &str) -> Result<Self, NotebookError> {
        let root: Value = serde_json::from_str(text)?;
        if !root.is_object() {
            return Err(NotebookError::NotAnObject);
        }
        match root.get("cells") {
            None | Some(Value::Array(_)) => Ok(Self { root }),
            Some(_) => Err(NotebookError::CellsNotArray),
        }
    }

    /// The `cells` array, empty when the notebook has none.
    pub fn cells(&self) -> &[Value] {
        match self.root.get("cells") {
            Some(Value::Array(cells)) => cells.as_slice(),
            _ => &[],
        }
    }

    /// Strip comments from code cells and decoration from markdown cells.
    ///
    /// Every rewritten `source` ends up in list form. Returns whether anything
    /// changed.
    pub fn clean(&mut self) -> bool {
        let Some(Value::Array(cells)) = self.root.get_mut("cells") else {
            return false;
        };

        let mut changed = false;
        for (index, cell) in cells.iter_mut().enumerate() {
            let kind = CellKind::of(cell);
            if kind == CellKind::Other {
                continue;
            }
            let Some(source) = cell.get_mut("source") else {
                continue;
            };
            let Some(lines) = source_lines(source) else {
                debug!(index, "skipping cell with non-text source");
                continue;
            };

            let cleaned = match kind {
                CellKind::Code => strip_comments(&lines),
                CellKind::Markdown => lines.iter().map(|l| clean_markdown_line(l)).collect(),
                CellKind::Other => continue,
            };

            let cleaned = lines_to_value(cleaned);
            if *source != cleaned {
                debug!(index, ?kind, "cell rewritten");
                *source = cleaned;
                changed = true;
            }
        }

        changed
    }

    /// Apply literal substitutions to every string in the document.
    ///
    /// Working on decoded strings lets patterns containing `"` match text that
    /// is stored escaped in the file.
    pub fn substitute(&mut self, subs: &[Substitution]) -> bool {
        map_strings(&mut self.root, &|text: &str| apply_substitutions(text, subs))
    }

    /// Serialize the way Jupyter does: one-space indent, raw UTF-8, final newline.
    pub fn to_json(&self) -> Result<String, NotebookError> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.root.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(String::from_utf8(buf)?)
    }
}

/// Rewrite every string value in the document with `f`, keys excluded.
fn map_strings(value: &mut Value, f: &impl Fn(&str) -> String) -> bool {
    match value {
        Value::String(text) => {
            let mapped = f(text);
            if mapped == *text {
                return false;
            }
            *text = mapped;
            true
        }
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |changed, item| map_strings(item, f) | changed),
        Value::Object(map) => map
            .values_mut()
            .fold(false, |changed, item| map_strings(item, f) | changed),
        _ => false,
    }
}

/// Clean a notebook given as text; untouched notebooks come back verbatim.
pub fn clean_notebook_text(text: &str) -> Result<String, NotebookError> {
    let mut notebook = Notebook::parse(text)?;
    if notebook.clean() {
        notebook.to_json()
    } else {
        Ok(text.to_string())
    }
}

/// Substitute inside a notebook given as text; untouched notebooks come back verbatim.
pub fn tidy_notebook_text(text: &str, subs: &[Substitution]) -> Result<String, NotebookError> {
    let mut notebook = Notebook::parse(text)?;
    if notebook.substitute(subs) {
        notebook.to_json()
    } else {
        Ok(text.to_string())
    }
}
