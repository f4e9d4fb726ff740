//! Data models for the study-management domain.
//!
//! This module contains the core domain models: subjects and topics organize
//! study material, assignments hold ordered questions, and each question
//! carries an ordered sequence of AI-generated solution steps. Display
//! implementations live in [`crate::display::models`] to keep data structures
//! separate from presentation logic.

pub mod assignment;
pub mod filters;
pub mod flashcard;
pub mod lecture;
pub mod mode;
pub mod question;
pub mod step;
pub mod subject;
pub mod summary;


pub use assignment::{Assignment, Priority};
pub use filters::AssignmentFilter;
pub use flashcard::{Difficulty, Flashcard, IncorrectAnswer};
pub use lecture::Lecture;
pub use mode::ExplanationMode;
pub use question::Question;
pub use step::SolutionStep;
pub use subject::{Subject, Topic};
pub use summary::AssignmentSummary;
