//! Filter types for assignment listing.

use jiff::Timestamp;

use super::Priority;

/// Filter criteria for listing assignments.
///
/// All fields are optional; results are always ordered by due date
/// ascending.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    /// Only assignments with this completion state
    pub completed: Option<bool>,

    /// Only assignments with this priority
    pub priority: Option<Priority>,

    /// Only assignments for this subject
    pub subject_id: Option<u64>,

    /// Only assignments due at or before this time
    pub due_before: Option<Timestamp>,
}

impl AssignmentFilter {
    /// Filter for pending (not yet completed) assignments.
    pub fn pending() -> Self {
        Self {
            completed: Some(false),
            ..Default::default()
        }
    }
}
