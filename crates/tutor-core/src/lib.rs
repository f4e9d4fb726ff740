//! Core library for the Tutor study management application.
//!
//! This crate provides the business logic for managing subjects, assignments,
//! questions and lectures, plus the AI-assisted workflows: the step-by-step
//! question solver and the study aid generators (notes, practice questions,
//! flashcards, weak skill detection).
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): Typed data with [`std::fmt::Display`]
//!   implementations producing markdown
//! - **Database** ([`db`]): SQLite persistence with transactional write paths
//! - **AI** ([`ai`]): The [`GenerativeClient`](ai::GenerativeClient) seam and
//!   the Gemini implementation
//! - **Tutor** ([`tutor`]): The coordinator tying storage and generation
//!   together
//!
//! # Quick Start
//!
//! ```rust
//! use tutor_core::{TutorBuilder, params::CreateAssignment};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tutor = TutorBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreateAssignment {
//!     title: "Algebra homework".to_string(),
//!     subject_id: None,
//!     due_at: "2026-09-01T00:00:00Z".parse()?,
//!     priority: Default::default(),
//! };
//!
//! let assignment = tutor.create_assignment(&params).await?;
//! println!("Created assignment: {}", assignment);
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod parse;
pub mod tutor;

// Re-export commonly used types
pub use ai::{GeminiClient, GenerativeClient};
pub use db::Database;
pub use display::{
    AssignmentSummaries, Lectures, LocalDateTime, OperationStatus, SolutionSteps, Subjects,
};
pub use error::{Result, TutorError};
pub use models::{
    Assignment, AssignmentFilter, AssignmentSummary, Difficulty, ExplanationMode, Flashcard,
    IncorrectAnswer, Lecture, Priority, Question, SolutionStep, Subject, Topic,
};
pub use params::{
    AddQuestion, CreateAssignment, CreateSubject, CreateTopic, DetectWeakSkills, ExtractQuestions,
    GenerateStep, Id, ListAssignments, LogLecture, MakeFlashcards, PracticeQuestions, StudyNotes,
};
pub use tutor::{SolverState, StepSession, Tutor, TutorBuilder};
