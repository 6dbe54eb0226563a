use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Removes every single-quote character from a raw log token.
pub fn strip_quotes(raw: &str) -> String {
    raw.replace('\'', "")
}

/// Splits a trigger list payload on `", "` and strips quotes from each name.
///
/// An empty payload yields a single empty name, matching how the checker's
/// summary line has always been counted.
pub fn split_names(payload: &str) -> Vec<String> {
    payload.split(", ").map(strip_quotes).collect()
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
