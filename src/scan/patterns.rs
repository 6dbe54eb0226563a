use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("log pattern is a valid regex literal")
}

pub(super) static CRITICAL_COUNT: Lazy<Regex> =
    Lazy::new(|| compile(r"Critical differences found: (\d+)"));

pub(super) static TABLE_MODIFICATIONS: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"Table '([^']+)' modifications: ",
        r"missing_cols=\[(.*?)\], ",
        r"extra_cols=\[(.*?)\], ",
        r"modified_cols=\[(.*?)\], ",
        r"missing_constraints=\[(.*?)\], ",
        r"extra_constraints=\[(.*?)\]",
    ))
});

pub(super) static MODIFIED_COLUMN: Lazy<Regex> =
    Lazy::new(|| compile(r"Modified column '([^']+)':"));

// Greedy so nested parens such as `varchar(255)` stay inside the payload.
pub(super) static DATA_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"data_type: \((.*)\)"));

pub(super) static DEFAULT: Lazy<Regex> = Lazy::new(|| compile(r"default: \((.*)\)"));

pub(super) static INDEX_DIFFERENCES: Lazy<Regex> =
    Lazy::new(|| compile(r"Index '([^']+)' has differences:"));

pub(super) static TRIGGER_MODIFIED: Lazy<Regex> =
    Lazy::new(|| compile(r"modified: \[(.*?)\]"));
