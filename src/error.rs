use std::path::PathBuf;

use thiserror::Error;

/// Rejection of an upload candidate. Shown inline by the upload widget,
/// never propagated past it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("File size must be less than {max_mib}MB")]
    TooLarge { max_mib: f64 },

    #[error("Please select a valid file type: {}", accepted.join(", "))]
    InvalidType { accepted: Vec<String> },
}

/// Failure reported by a content processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Service error: {0}")]
    Service(String),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to spawn {cmd}: {source}")]
    Spawn {
        cmd: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{cmd} exited with status {status}")]
    Status {
        cmd: &'static str,
        status: std::process::ExitStatus,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_limit_and_types() {
        let err = ValidationError::TooLarge { max_mib: 1.0 };
        assert_eq!(err.to_string(), "File size must be less than 1MB");

        let err = ValidationError::InvalidType {
            accepted: vec!["audio/*".into(), "video/*".into()],
        };
        assert_eq!(
            err.to_string(),
            "Please select a valid file type: audio/*, video/*"
        );
    }
}
