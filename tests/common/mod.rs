#![allow(dead_code)]

pub use assert_cmd::Command;
pub use drift_report::prelude::*;
pub use std::io::Write;
pub use tempfile::NamedTempFile;

/// A log as the drift checker prints it for a database with drift in every
/// category the report understands.
pub const SAMPLE_LOG: &str = r#"INFO: Connecting to database
INFO: Comparing schema against migrations
INFO: Table 'users' modifications: missing_cols=['email', 'bio'], extra_cols=['legacy_flag'], modified_cols=['name'], missing_constraints=['users_pkey'], extra_constraints=['users_name_check']
  Modified column 'name':
    data_type: ('varchar(50)', 'text')
    default: (None, "''::text")
  Extra constraints details:
    users_name_check: CHECK (length(name) > 0)
INFO: Table 'orders' modifications: missing_cols=[], extra_cols=[], modified_cols=['total'], missing_constraints=[], extra_constraints=[]
  Modified column 'total':
    data_type: ('integer', 'numeric(10, 2)')
INFO: Index 'idx_users_email' has differences:
    definition differs
INFO: Index 'idx_orders_created' has differences:
INFO: Trigger diff summary: added: [], removed: [], modified: ['audit_users', 'touch_orders']
INFO: Schema diff summary: 2 tables, 2 indexes, 2 triggers
ERROR: Critical differences found: 6
"#;

pub fn sample_lines() -> Vec<String> {
    SAMPLE_LOG.lines().map(str::to_string).collect()
}

pub fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

pub fn drift_report() -> Command {
    let mut cmd = Command::cargo_bin("drift-report").unwrap();
    cmd.env_remove("DRIFT_REPORT_FORMAT")
        .env_remove("DRIFT_REPORT_MAX_LISTED")
        .env_remove("RUST_LOG");
    cmd
}
