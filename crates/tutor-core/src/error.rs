//! Error types for the tutor library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tutor operations.
#[derive(Error, Debug)]
pub enum TutorError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Assignment not found for the given ID
    #[error("Assignment with ID {id} not found")]
    AssignmentNotFound { id: u64 },
    /// Question not found for the given ID
    #[error("Question with ID {id} not found")]
    QuestionNotFound { id: u64 },
    /// Solution step not found within a question's sequence
    #[error("Step {step_number} of question {question_id} not found")]
    StepNotFound { question_id: u64, step_number: u32 },
    /// Subject not found for the given ID
    #[error("Subject with ID {id} not found")]
    SubjectNotFound { id: u64 },
    /// The stored step sequence changed between read and write. The append
    /// was rejected to keep step numbers contiguous; re-read and retry.
    #[error(
        "Step sequence for question {question_id} changed: expected {expected} stored steps, found {actual}"
    )]
    StepConflict {
        question_id: u64,
        expected: u32,
        actual: u32,
    },
    /// The generative service failed or returned unusable content
    #[error("AI generation failed: {message}")]
    AiGeneration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TutorError {
    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an AI generation error with a message.
    pub fn ai_generation(message: impl Into<String>) -> Self {
        Self::AiGeneration {
            message: message.into(),
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for TutorError {
    fn from(source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            format!("request timed out: {source}")
        } else {
            source.to_string()
        };
        TutorError::AiGeneration { message }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TutorError::database_error(message, e))
    }
}

/// Result type alias for tutor operations
pub type Result<T> = std::result::Result<T, TutorError>;
