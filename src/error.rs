// Crate error type
// Distinct kinds so callers can branch on cause instead of matching strings

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the ledger store and the reporter.
///
/// No variant is auto-recovered: a malformed storage file is reported, not
/// repaired, and failed writes are not retried.
#[derive(Debug, Error)]
pub enum PocketbookError {
    /// The storage file exists but is not a valid transaction log:
    /// unparseable JSON, a record missing a required field, or a date or
    /// amount that does not parse.
    #[error("malformed storage file {path:?}: {reason}")]
    MalformedStorage { path: PathBuf, reason: String },

    /// The storage or results path could not be written.
    #[error("failed to write {path:?}")]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Out-of-range or non-numeric user input. Produced by the CLI layer
    /// only; core operations never see unvalidated input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PocketbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = PocketbookError::MalformedStorage {
            path: PathBuf::from("/tmp/ledger.json"),
            reason: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/ledger.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_write_failure_keeps_io_source() {
        use std::error::Error;

        let err = PocketbookError::FileWriteFailure {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some(), "Should expose the io::Error cause");
    }
}
