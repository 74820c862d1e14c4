// crates/sales-report-core/src/error.rs

use thiserror::Error;

use crate::mailer::MailError;

/// A share column that could not be turned into a percentage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("column '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("column '{field}' is not a number: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("column '{field}' is outside 0-100: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Per-record failures. These skip or fail a single store and never stop the run.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid recipient address: '{value}'")]
    InvalidRecipient { value: String },

    #[error("share parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("send failed: {0}")]
    Send(#[from] MailError),
}
