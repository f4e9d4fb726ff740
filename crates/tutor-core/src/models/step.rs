//! Solution step model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ExplanationMode;

/// One unit of an incrementally revealed solution.
///
/// Steps are immutable once created, except for `confirmed` which
/// transitions `false` to `true` exactly once when the learner confirms
/// understanding. Step numbers within a question are contiguous from 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolutionStep {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the parent question
    pub question_id: u64,

    /// 1-based step number, equal to the step's position in the sequence
    pub step_number: u32,

    /// Explanation text returned by the generative service
    pub explanation: String,

    /// Whether the learner has confirmed understanding of this step
    pub confirmed: bool,

    /// Explanation mode that was used to generate this step
    pub mode: ExplanationMode,

    /// Timestamp when the step was created (UTC)
    pub created_at: Timestamp,
}
