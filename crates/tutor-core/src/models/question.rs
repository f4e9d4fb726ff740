//! Question model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::SolutionStep;

/// Represents a single question within an assignment.
///
/// Questions are order-significant: `position` is the question's 0-based
/// index within the assignment's sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique identifier for the question
    pub id: u64,

    /// ID of the parent assignment
    pub assignment_id: u64,

    /// Text content of the question
    pub content: String,

    /// Optional reference to the source image the question was extracted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,

    /// Whether the learner has marked the question completed
    pub completed: bool,

    /// 0-based position within the assignment
    pub position: u32,

    /// Timestamp when the question was created (UTC)
    pub created_at: Timestamp,

    /// Solution steps generated so far, in step-number order
    #[serde(default)]
    pub steps: Vec<SolutionStep>,
}
