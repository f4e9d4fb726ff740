//! Assignment model definition and related functionality.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Question;

/// Represents a homework assignment with its ordered questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// Unique identifier for the assignment
    pub id: u64,

    /// Title of the assignment
    pub title: String,

    /// Optional subject the assignment belongs to
    pub subject_id: Option<u64>,

    /// When the assignment is due (UTC)
    pub due_at: Timestamp,

    /// Priority of the assignment
    #[serde(default)]
    pub priority: Priority,

    /// Whether the assignment has been completed
    pub completed: bool,

    /// Timestamp when the assignment was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the assignment was last modified (UTC)
    pub updated_at: Timestamp,

    /// Ordered questions (eagerly loaded when the assignment is shown)
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Type-safe enumeration of assignment priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,

    /// Normal urgency
    #[default]
    Medium,

    /// Needs attention soon
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}
