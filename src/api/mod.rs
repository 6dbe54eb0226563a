//! High-level API mirroring the CLI.
//!
//! # Example
//!
//! ```
//! use drift_report::api::format;
//!
//! let report = format(&["Critical differences found: 0"]);
//! assert!(report.contains("✅"));
//! ```

use crate::parser::parse_drift_log;
use crate::report::{generate_json_report, generate_markdown_report, OutputFormat, ReportOptions};
use crate::util::{ReportError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Formats log lines as the default markdown annotation.
pub fn format<S: AsRef<str>>(lines: &[S]) -> String {
    generate_markdown_report(&parse_drift_log(lines), &ReportOptions::default())
}

pub fn format_with<S: AsRef<str>>(lines: &[S], options: &ReportOptions) -> Result<String> {
    let log = parse_drift_log(lines);
    match options.format {
        OutputFormat::Markdown => Ok(generate_markdown_report(&log, options)),
        OutputFormat::Json => Ok(generate_json_report(&log)?),
    }
}

/// Reads a log file into lines. Fails on unreadable or non UTF-8 input.
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ReportError::read(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| ReportError::decode(path, e))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read drift log");
    Ok(lines)
}

pub fn format_file(path: impl AsRef<Path>, options: &ReportOptions) -> Result<String> {
    let lines = read_log_lines(path)?;
    format_with(&lines, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn format_is_deterministic() {
        let lines = [
            "Critical differences found: 2",
            "INFO: Index 'idx_a' has differences:",
        ];
        assert_eq!(format(&lines), format(&lines));
    }

    #[test]
    fn format_with_json() {
        let lines = ["Critical differences found: 1"];
        let json = format_with(&lines, &ReportOptions::new(OutputFormat::Json)).unwrap();
        assert!(json.contains("\"error_count\": \"1\""));
    }

    #[test]
    fn read_log_lines_handles_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\r\nsecond\r\n").unwrap();

        let lines = read_log_lines(file.path()).unwrap();

        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn read_log_lines_missing_file() {
        let err = read_log_lines("/nonexistent/drift.log").unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }

    #[test]
    fn read_log_lines_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x49, 0x4e, 0xff, 0xfe]).unwrap();

        let err = read_log_lines(file.path()).unwrap_err();

        assert!(matches!(err, ReportError::Decode { .. }));
    }

    #[test]
    fn format_file_matches_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Critical differences found: 5").unwrap();
        writeln!(file, "INFO: Trigger diff summary: modified: ['t1', 't2']").unwrap();

        let from_file = format_file(file.path(), &ReportOptions::default()).unwrap();
        let from_lines = format(&[
            "Critical differences found: 5",
            "INFO: Trigger diff summary: modified: ['t1', 't2']",
        ]);

        assert_eq!(from_file, from_lines);
    }
}
