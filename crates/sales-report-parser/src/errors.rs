use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a whole run. Nothing is dispatched once one of these is hit.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file {} could not be read: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row at line {line} has {found} fields but the header has {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("source file has no header row")]
    EmptyHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return LoadError::MalformedRow {
                line: pos.as_ref().map_or(0, |pos| pos.line()),
                expected: *expected_len as usize,
                found: *len as usize,
            };
        }
        LoadError::Csv(err)
    }
}
