//! Error type shared by every lesson.
//!
//! An absent value is never an error here: empty reductions come back as
//! `None`. The only thing that can fail is writing the transcript.

use thiserror::Error;

/// Result type for lesson functions.
pub type Result<T> = std::result::Result<T, LessonError>;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("failed to write lesson output: {0}")]
    Io(#[from] std::io::Error),

    #[error("lesson '{lesson}' failed")]
    Failed {
        lesson: &'static str,
        #[source]
        source: Box<LessonError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_failed_keeps_source() {
        let inner = LessonError::Io(std::io::Error::other("pipe closed"));
        let err = LessonError::Failed {
            lesson: "strings",
            source: Box::new(inner),
        };

        assert_eq!(err.to_string(), "lesson 'strings' failed");
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("failed to write lesson output: pipe closed")
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: LessonError = io.into();
        assert!(matches!(err, LessonError::Io(_)));
    }
}
