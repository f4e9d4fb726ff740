//! Compact assignment summary for list display.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Assignment, Priority};

/// Assignment metadata plus question counts, used for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentSummary {
    /// Unique identifier for the assignment
    pub id: u64,

    /// Title of the assignment
    pub title: String,

    /// Optional subject the assignment belongs to
    pub subject_id: Option<u64>,

    /// When the assignment is due (UTC)
    pub due_at: Timestamp,

    /// Priority of the assignment
    pub priority: Priority,

    /// Whether the assignment has been completed
    pub completed: bool,

    /// Timestamp when the assignment was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the assignment was last modified (UTC)
    pub updated_at: Timestamp,

    /// Number of questions in the assignment
    pub total_questions: u32,

    /// Number of questions marked completed
    pub completed_questions: u32,
}

impl From<&Assignment> for AssignmentSummary {
    fn from(assignment: &Assignment) -> Self {
        let completed_questions =
            assignment.questions.iter().filter(|q| q.completed).count() as u32;
        Self {
            id: assignment.id,
            title: assignment.title.clone(),
            subject_id: assignment.subject_id,
            due_at: assignment.due_at,
            priority: assignment.priority,
            completed: assignment.completed,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
            total_questions: assignment.questions.len() as u32,
            completed_questions,
        }
    }
}
