//! Error types for substitution and file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for alignment-preserving substitution operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur while loading, transforming, or saving a file.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The search text is empty.
    #[error("Search text must not be empty")]
    EmptySearchText,

    /// Failed to read the target file.
    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the target file.
    #[error("Failed to write file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid UTF-8.
    #[error("File {path} is not valid UTF-8")]
    DecodeError { path: PathBuf },

    /// A realigned line would need a negative indentation width, which means
    /// the input was not consistently aligned to begin with.
    #[error("Line {line} is not aligned on the parenthesis (computed indentation width {width})")]
    AlignmentViolation { line: usize, width: isize },

    /// An edit addressed a position outside the buffer.
    #[error("Position {line}:{column} is out of bounds")]
    OutOfBounds { line: usize, column: usize },
}

impl AlignError {
    /// Create a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create an alignment violation for a line (1-based in the message).
    pub fn alignment_violation(line_index: usize, width: isize) -> Self {
        Self::AlignmentViolation {
            line: line_index + 1,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlignError::EmptySearchText;
        assert!(err.to_string().contains("must not be empty"));

        let err = AlignError::read(
            "/some/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/some/path"));

        let err = AlignError::alignment_violation(4, -3);
        assert!(err.to_string().contains("Line 5"));
        assert!(err.to_string().contains("-3"));
    }
}
