//! Markdown and JSON rendering of a parsed [`DriftLog`].
//!
//! The markdown tokens (emoji, header levels, footer) are read by CI comment
//! renderers downstream and must stay byte-stable.

use crate::model::{DriftLog, TableDetail, TableDiff};
use crate::util::strip_quotes;
use std::fmt;
use std::str::FromStr;

pub const NO_DRIFT_MESSAGE: &str =
    "## ✅ Schema Drift Detection\nNo schema drift detected. The database matches the migrations.";

pub const HEADER: &str = "## 🔍 Schema Drift Detection";

pub const FOOTER: &str = "📋 See the full drift check logs for details.";

pub const DEFAULT_MAX_LISTED: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected markdown or json)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Rendering options. The default reproduces the stock CI annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Cap on names listed under index and trigger headers. Header counts
    /// always show the full total.
    pub max_listed: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            max_listed: DEFAULT_MAX_LISTED,
        }
    }
}

impl ReportOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_max_listed(mut self, max_listed: usize) -> Self {
        self.max_listed = max_listed;
        self
    }
}

pub fn generate_markdown_report(log: &DriftLog, options: &ReportOptions) -> String {
    if !log.has_drift {
        return NO_DRIFT_MESSAGE.to_string();
    }

    let mut summary: Vec<String> = vec![
        HEADER.to_string(),
        format!(
            "**Drift detected: {} difference(s) found**",
            log.error_count
        ),
    ];

    for table in &log.tables {
        push_table(&mut summary, table);
    }

    if !log.indexes.is_empty() {
        push_name_block(
            &mut summary,
            "Index Differences",
            &log.indexes,
            options.max_listed,
        );
    }

    if let Some(triggers) = &log.triggers {
        push_name_block(
            &mut summary,
            "Trigger Differences",
            triggers,
            options.max_listed,
        );
    }

    summary.push(String::new());
    summary.push(FOOTER.to_string());

    summary.join("\n")
}

pub fn generate_json_report(log: &DriftLog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(log)
}

fn push_table(summary: &mut Vec<String>, table: &TableDiff) {
    summary.push(String::new());
    summary.push(format!("### Table: {}", table.name));

    // missing_constraints is parsed but intentionally left out here.
    for (icon, label, raw) in [
        ("❌", "Missing columns", &table.missing_cols),
        ("➕", "Extra columns", &table.extra_cols),
        ("⚠️", "Modified columns", &table.modified_cols),
        ("🔗", "Extra constraints", &table.extra_constraints),
    ] {
        if !raw.is_empty() {
            summary.push(format!("- {icon} {label}: {}", strip_quotes(raw)));
        }
    }

    for detail in &table.details {
        summary.push(match detail {
            TableDetail::Column(name) => format!("  - Modified column `{name}`:"),
            TableDetail::DataType(payload) => format!("    - data_type: ({payload})"),
            TableDetail::Default(payload) => format!("    - default: ({payload})"),
        });
    }
}

fn push_name_block(summary: &mut Vec<String>, title: &str, names: &[String], max_listed: usize) {
    summary.push(String::new());
    summary.push(format!("### {title} ({})", names.len()));
    summary.push("```".to_string());
    summary.extend(names.iter().take(max_listed).cloned());
    summary.push("```".to_string());
}
