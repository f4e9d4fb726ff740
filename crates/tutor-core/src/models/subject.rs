//! Subject and topic models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A subject of study (e.g. "Mathematics").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    /// Unique identifier for the subject
    pub id: u64,

    /// Name of the subject
    pub name: String,

    /// Optional short icon (an emoji in the reference UI)
    pub icon: Option<String>,

    /// Timestamp when the subject was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the subject was last modified (UTC)
    pub updated_at: Timestamp,
}

/// A topic within a subject (e.g. "Quadratic equations").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Unique identifier for the topic
    pub id: u64,

    /// ID of the parent subject
    pub subject_id: u64,

    /// Name of the topic
    pub name: String,

    /// Timestamp when the topic was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the topic was last modified (UTC)
    pub updated_at: Timestamp,
}
