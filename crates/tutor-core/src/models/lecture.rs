//! Lecture log model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A logged lecture entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lecture {
    /// Unique identifier for the lecture
    pub id: u64,

    /// Title of the lecture
    pub title: String,

    /// Optional subject the lecture belongs to
    pub subject_id: Option<u64>,

    /// When the lecture was held (UTC)
    pub held_at: Timestamp,

    /// Free-form notes taken during the lecture
    pub notes: Option<String>,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,
}
