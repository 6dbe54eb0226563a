use serde::Serialize;

/// Count value the checker prints when it found nothing.
pub const NO_DRIFT_COUNT: &str = "0";

/// Everything recognized in one drift checker log.
///
/// `error_count` is kept as the raw digit string from the log; only the
/// literal `"0"` means "no drift".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftLog {
    pub error_count: String,
    pub has_drift: bool,
    pub tables: Vec<TableDiff>,
    /// Every index reported, in order of appearance, duplicates included.
    pub indexes: Vec<String>,
    /// Names from the first trigger summary line, if it carried a list.
    pub triggers: Option<Vec<String>>,
}

impl DriftLog {
    pub fn no_drift(error_count: impl Into<String>) -> Self {
        Self {
            error_count: error_count.into(),
            has_drift: false,
            tables: Vec::new(),
            indexes: Vec::new(),
            triggers: None,
        }
    }
}

/// One `Table '<name>' modifications:` line and the detail lines after it.
///
/// The list fields hold the raw text between the brackets, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDiff {
    pub name: String,
    pub missing_cols: String,
    pub extra_cols: String,
    pub modified_cols: String,
    // Never rendered in the markdown report.
    pub missing_constraints: String,
    pub extra_constraints: String,
    pub details: Vec<TableDetail>,
}

/// A detail line inside a table block, in log order. A `DataType` or
/// `Default` belongs to the closest preceding `Column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TableDetail {
    Column(String),
    DataType(String),
    Default(String),
}
