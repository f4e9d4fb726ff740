//! High-level tutor API coordinating storage and AI generation.
//!
//! This module provides the main [`Tutor`] interface. The tutor is the
//! central coordinator between interface layers and the database plus the
//! generative AI client, implementing all business logic for assignments,
//! questions, solution steps, subjects, lectures and study aids.
//!
//! Database work runs on blocking tasks; each operation opens its own
//! connection against the configured path. AI calls go through the
//! [`GenerativeClient`](crate::ai::GenerativeClient) trait object the tutor
//! was built with, so the whole API stays testable without a network.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tutor`] instances with configuration
//! - [`assignment_ops`]: Assignment lifecycle (create, list, show, complete, delete)
//! - [`question_ops`]: Question management including image extraction
//! - [`solver`]: The step-by-step solution workflow
//! - [`subject_ops`]: Subjects and topics
//! - [`lecture_ops`]: Lecture logging
//! - [`study_ops`]: AI study aids (notes, practice questions, flashcards, weak skills)
//! - [`settings_ops`]: Key-value preferences

use std::path::PathBuf;
use std::sync::Arc;

use crate::ai::GenerativeClient;

pub mod assignment_ops;
pub mod builder;
pub mod lecture_ops;
pub mod question_ops;
pub mod settings_ops;
pub mod solver;
pub mod study_ops;
pub mod subject_ops;

pub use builder::TutorBuilder;
pub use solver::{SolverState, StepSession};

/// Main tutor interface for managing study data and AI-assisted solving.
pub struct Tutor {
    pub(crate) db_path: PathBuf,
    pub(crate) ai: Arc<dyn GenerativeClient>,
}

impl Tutor {
    /// Creates a new tutor with the specified database path and AI client.
    pub(crate) fn new(db_path: PathBuf, ai: Arc<dyn GenerativeClient>) -> Self {
        Self { db_path, ai }
    }
}
