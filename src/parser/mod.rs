//! Forward-only scan of a drift checker log into a [`DriftLog`].
//!
//! The table pass is a two-state machine driven by a [`Cursor`]. In
//! [`ScanState::ScanningTop`] each line is consumed and tested for a table
//! modifications header. A match opens [`ScanState::InTableDetail`], which
//! consumes lines into the open table until a terminator line, which is left
//! unconsumed so the top-level scan sees it next. The count, index and
//! trigger passes each read the whole log independently.

use crate::model::{DriftLog, TableDetail, TableDiff, NO_DRIFT_COUNT};
use crate::scan::{self, DetailEvent};
use crate::util::split_names;
use tracing::{debug, trace};


/// Scan state of the table pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    ScanningTop,
    /// Collecting detail lines for the table that opened the block.
    InTableDetail(TableDiff),
}

/// Position in the log. Only ever moves forward.
#[derive(Debug)]
pub struct Cursor<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(AsRef::as_ref)
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Parses a full log. Stops after the count pass when the log reports no drift.
pub fn parse_drift_log<S: AsRef<str>>(lines: &[S]) -> DriftLog {
    let error_count = find_error_count(lines);
    if error_count == NO_DRIFT_COUNT {
        debug!("no critical differences reported");
        return DriftLog::no_drift(error_count);
    }

    let tables = parse_tables(lines);
    let indexes = collect_indexes(lines);
    let triggers = find_triggers(lines);
    debug!(
        error_count = %error_count,
        tables = tables.len(),
        indexes = indexes.len(),
        triggers = triggers.as_ref().map_or(0, Vec::len),
        "parsed drift log"
    );

    DriftLog {
        error_count,
        has_drift: true,
        tables,
        indexes,
        triggers,
    }
}

/// Digits from the first `Critical differences found: N` line, `"0"` if none.
pub fn find_error_count<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .find_map(|line| scan::critical_count(line.as_ref()))
        .unwrap_or(NO_DRIFT_COUNT)
        .to_string()
}

pub fn parse_tables<S: AsRef<str>>(lines: &[S]) -> Vec<TableDiff> {
    let mut cursor = Cursor::new(lines);
    let mut state = ScanState::ScanningTop;
    let mut tables = Vec::new();

    while let Some(line) = cursor.peek() {
        state = match state {
            ScanState::ScanningTop => {
                cursor.advance();
                match scan::table_modifications(line) {
                    Some(table) => {
                        debug!(table = %table.name, line = cursor.position(), "table modifications");
                        ScanState::InTableDetail(table)
                    }
                    None => ScanState::ScanningTop,
                }
            }
            ScanState::InTableDetail(mut table) => {
                if absorb_detail(&mut table, line) {
                    cursor.advance();
                    ScanState::InTableDetail(table)
                } else {
                    trace!(table = %table.name, line = cursor.position(), "detail block closed");
                    tables.push(table);
                    ScanState::ScanningTop
                }
            }
        };
    }

    if let ScanState::InTableDetail(table) = state {
        tables.push(table);
    }

    tables
}

/// Feeds one line to an open table block. Returns `false` when the line
/// closes the block, in which case it must not be consumed.
pub fn absorb_detail(table: &mut TableDiff, line: &str) -> bool {
    match scan::classify_detail(line) {
        DetailEvent::Terminator => return false,
        DetailEvent::ModifiedColumn(name) => table.details.push(TableDetail::Column(name.into())),
        DetailEvent::DataType(Some(payload)) => {
            table.details.push(TableDetail::DataType(payload.into()))
        }
        DetailEvent::Default(Some(payload)) => {
            table.details.push(TableDetail::Default(payload.into()))
        }
        DetailEvent::DataType(None)
        | DetailEvent::Default(None)
        | DetailEvent::ExtraConstraintsDetails
        | DetailEvent::Other => {}
    }
    true
}

pub fn collect_indexes<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| scan::index_name(line.as_ref()))
        .map(str::to_string)
        .collect()
}

/// Only the first trigger summary line is read, even if later ones exist.
pub fn find_triggers<S: AsRef<str>>(lines: &[S]) -> Option<Vec<String>> {
    let summary = lines
        .iter()
        .map(AsRef::as_ref)
        .find(|line| scan::is_trigger_summary(line))?;
    scan::trigger_payload(summary).map(split_names)
}
