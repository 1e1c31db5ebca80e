use chrono::NaiveDate;
use thiserror::Error;

/// Error type covering schedule validation, boundary and persistence failures.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("item `{id}` ends on {end} before it starts on {start}")]
    InvalidRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("month {0} is out of range")]
    MonthOutOfRange(u32),
    #[error("year {0} is outside the supported range 1-9999")]
    YearOutOfRange(i32),
    #[error("invalid record `{id}`: {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("unparseable threshold `{0}`")]
    UnparseableThreshold(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ScheduleError {
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
