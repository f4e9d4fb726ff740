//! Parameter structures for tutor operations.
//!
//! Shared parameter structures used across interfaces (CLI today, other
//! frontends later) without framework-specific derives. Interface layers
//! define their own argument structs and convert into these via `From`,
//! keeping clap concerns out of the core domain:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ Business Logic
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, ExplanationMode, IncorrectAnswer, Priority};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    /// Title of the assignment (required)
    pub title: String,
    /// Optional subject the assignment belongs to
    pub subject_id: Option<u64>,
    /// Due timestamp (UTC)
    pub due_at: Timestamp,
    /// Priority, defaults to medium
    #[serde(default)]
    pub priority: Priority,
}

/// Parameters for listing assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAssignments {
    /// Include completed assignments (pending-only by default)
    #[serde(default)]
    pub all: bool,
    /// Only assignments for this subject
    pub subject_id: Option<u64>,
    /// Only assignments with this priority
    pub priority: Option<Priority>,
}

/// Parameters for adding a question to an assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddQuestion {
    /// ID of the assignment to add the question to
    pub assignment_id: u64,
    /// Text content of the question (required)
    pub content: String,
    /// Optional reference to a source image
    pub image_ref: Option<String>,
}

/// Parameters for extracting questions from an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractQuestions {
    /// ID of the assignment to append the extracted questions to
    pub assignment_id: u64,
    /// Path to the image file on disk
    pub image_path: String,
}

/// Parameters for generating the next solution step of a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateStep {
    /// ID of the question to solve
    pub question_id: u64,
    /// Explanation mode to generate with
    #[serde(default)]
    pub mode: ExplanationMode,
}

/// Parameters for creating a new subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubject {
    /// Name of the subject (required)
    pub name: String,
    /// Optional short icon
    pub icon: Option<String>,
}

/// Parameters for creating a topic within a subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTopic {
    /// ID of the parent subject
    pub subject_id: u64,
    /// Name of the topic (required)
    pub name: String,
}

/// Parameters for logging a lecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLecture {
    /// Title of the lecture (required)
    pub title: String,
    /// Optional subject the lecture belongs to
    pub subject_id: Option<u64>,
    /// When the lecture was held (UTC)
    pub held_at: Timestamp,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Parameters for generating study notes on a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyNotes {
    /// Topic name to generate notes for
    pub topic: String,
    /// Optional source material the notes should be based on
    pub material: Option<String>,
}

/// Parameters for generating practice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeQuestions {
    /// Topic name to generate questions for
    pub topic: String,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Number of questions to request
    pub count: u32,
    /// Weak areas the questions should focus on
    #[serde(default)]
    pub weak_skills: Vec<String>,
}

impl Default for PracticeQuestions {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: Difficulty::default(),
            count: 1,
            weak_skills: Vec::new(),
        }
    }
}

/// Parameters for generating flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeFlashcards {
    /// Topic name to generate flashcards for
    pub topic: String,
    /// Optional source material
    pub material: Option<String>,
    /// Number of flashcards to request
    pub count: u32,
}

impl Default for MakeFlashcards {
    fn default() -> Self {
        Self {
            topic: String::new(),
            material: None,
            count: 10,
        }
    }
}

/// Parameters for detecting weak skills from test performance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectWeakSkills {
    /// Topic name the test covered
    pub topic: String,
    /// The incorrect answers to analyze
    pub incorrect_answers: Vec<IncorrectAnswer>,
}
