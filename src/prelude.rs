//! Convenient re-exports for common drift-report usage.
//!
//! # Example
//!
//! ```
//! use drift_report::prelude::*;
//!
//! let lines = ["Critical differences found: 1"];
//! let log = parse_drift_log(&lines);
//! let report = generate_markdown_report(&log, &ReportOptions::default());
//! assert!(report.starts_with("## 🔍 Schema Drift Detection"));
//! ```

pub use crate::api::{format, format_file, format_with, read_log_lines};
pub use crate::model::{DriftLog, TableDetail, TableDiff};
pub use crate::parser::parse_drift_log;
pub use crate::report::{
    generate_json_report, generate_markdown_report, OutputFormat, ReportOptions,
};
pub use crate::util::ReportError;
