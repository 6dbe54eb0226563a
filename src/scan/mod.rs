//! Line classification for drift checker logs.
//!
//! Every recognizer trims the line first, so leading indentation and
//! trailing `\r` never affect a match. Matching is substring based: a
//! pattern may appear anywhere in the line, after a log prefix for example.

mod patterns;

use crate::model::TableDiff;
use patterns::{
    CRITICAL_COUNT, DATA_TYPE, DEFAULT, INDEX_DIFFERENCES, MODIFIED_COLUMN, TABLE_MODIFICATIONS,
    TRIGGER_MODIFIED,
};

/// Prefix that marks a checker status line.
pub const INFO_PREFIX: &str = "INFO:";

/// Markers that, on an `INFO:` line, close a table's detail block.
pub const DETAIL_TERMINATORS: [&str; 3] = ["Table '", "Schema diff summary", "Index '"];

pub const TRIGGER_SUMMARY_MARKER: &str = "Trigger diff summary";

const DATA_TYPE_MARKER: &str = "data_type:";
const DEFAULT_MARKER: &str = "default:";
const EXTRA_CONSTRAINTS_DETAILS_MARKER: &str = "Extra constraints details:";

/// What a line means while a table's detail block is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent<'a> {
    /// Closes the block; the line is left for the top-level scan.
    Terminator,
    ModifiedColumn(&'a str),
    /// A `data_type:` line. `None` when the line lacks a `(...)` payload.
    DataType(Option<&'a str>),
    /// A `default:` line. `None` when the line lacks a `(...)` payload.
    Default(Option<&'a str>),
    ExtraConstraintsDetails,
    Other,
}

impl DetailEvent<'_> {
    pub fn ends_block(&self) -> bool {
        matches!(self, DetailEvent::Terminator)
    }
}

pub fn critical_count(line: &str) -> Option<&str> {
    CRITICAL_COUNT
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a `Table '<name>' modifications: ...` line. The returned diff has
/// no details yet; those come from the lines that follow.
pub fn table_modifications(line: &str) -> Option<TableDiff> {
    let caps = TABLE_MODIFICATIONS.captures(line.trim())?;
    let field = |idx: usize| {
        caps.get(idx)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    Some(TableDiff {
        name: field(1),
        missing_cols: field(2),
        extra_cols: field(3),
        modified_cols: field(4),
        missing_constraints: field(5),
        extra_constraints: field(6),
        details: Vec::new(),
    })
}

pub fn is_detail_terminator(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(INFO_PREFIX)
        && DETAIL_TERMINATORS
            .iter()
            .any(|marker| line.contains(marker))
}

/// Classifies a line seen inside a table's detail block. The terminator check
/// wins over every other pattern.
pub fn classify_detail(line: &str) -> DetailEvent<'_> {
    if is_detail_terminator(line) {
        return DetailEvent::Terminator;
    }

    let line = line.trim();
    if let Some(name) = MODIFIED_COLUMN.captures(line).and_then(|caps| caps.get(1)) {
        DetailEvent::ModifiedColumn(name.as_str())
    } else if line.contains(DATA_TYPE_MARKER) {
        DetailEvent::DataType(first_group(&DATA_TYPE, line))
    } else if line.contains(DEFAULT_MARKER) {
        DetailEvent::Default(first_group(&DEFAULT, line))
    } else if line.contains(EXTRA_CONSTRAINTS_DETAILS_MARKER) {
        DetailEvent::ExtraConstraintsDetails
    } else {
        DetailEvent::Other
    }
}

pub fn index_name(line: &str) -> Option<&str> {
    first_group(&INDEX_DIFFERENCES, line.trim())
}

pub fn is_trigger_summary(line: &str) -> bool {
    line.contains(TRIGGER_SUMMARY_MARKER)
}

/// Returns the raw text inside `modified: [...]`, quotes and separators intact.
pub fn trigger_payload(line: &str) -> Option<&str> {
    first_group(&TRIGGER_MODIFIED, line.trim())
}

fn first_group<'a>(regex: &regex::Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
