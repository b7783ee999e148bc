//! Domain types for table-pager.
//!
//! Schema, records, and input-mode configuration. Pure data — the
//! browsing loop and renderer both program against these types.

use std::collections::BTreeMap;

use comfy_table::Color;
use serde::{Deserialize, Serialize};

// ============================================================================
// COLUMNS
// ============================================================================

/// A single display column: a name and an optional content color.
///
/// All columns are center-justified; color is the only per-column knob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name — both the header label and the record lookup key.
    pub name: String,
    /// Content color. None means the terminal default.
    pub color: Option<Color>,
}

impl Column {
    /// Create an uncolored column.
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            color: None,
        }
    }

    /// Create a column with a content color.
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Column {
            name: name.into(),
            color: Some(color),
        }
    }
}

/// Ordered column schema.
///
/// Set once before the browsing loop starts; replaced wholesale via
/// [`crate::browser::TableBrowser::configure_columns`], never mutated
/// during a run. Column order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, preserving insertion order.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for ColumnSchema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        ColumnSchema {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Parse a color name as used in CLI column specs ("Title:blue").
///
/// Unknown names return None (rendered without a color override).
pub fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "darkred" => Some(Color::DarkRed),
        "darkgreen" => Some(Color::DarkGreen),
        "darkyellow" => Some(Color::DarkYellow),
        "darkblue" => Some(Color::DarkBlue),
        "darkmagenta" => Some(Color::DarkMagenta),
        "darkcyan" => Some(Color::DarkCyan),
        _ => None,
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// One displayable record: column name → display value.
///
/// Records are opaque to the pager beyond lookup by column name. A record
/// may carry any subset of the schema's columns; absent keys display as
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Look up a field; absent keys read as empty string.
    pub fn get(&self, column: &str) -> &str {
        self.0.get(column).map(String::as_str).unwrap_or("")
    }

    /// Keys present in this record (sorted).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// INPUT MODE
// ============================================================================

/// How the prompt accepts input during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Accept any string: an index, `*`, a range (`1-4`), an open range
    /// (`3-*`), or the control tokens. The pager passes selections through
    /// verbatim; the caller interprets the grammar.
    FreeForm,
    /// Restrict input to `{"0" .. "max_index-1", "q", "", "back"}`.
    /// Membership is enforced by the prompt surface itself; anything else
    /// is re-prompted and never reaches the pager.
    Strict { max_index: usize },
}

// ============================================================================
// TESTS
// ============================================================================
