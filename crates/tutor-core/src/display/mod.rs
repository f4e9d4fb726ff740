//! Display formatting for domain models and collections.
//!
//! Domain models carry their own `Display` implementations producing
//! markdown, and newtype wrappers format collections with graceful handling
//! of empty results. All output is markdown so interface layers can render
//! it richly (the CLI pipes it through a terminal markdown renderer) or
//! pass it through as plain text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (AssignmentSummaries, SolutionSteps, ...)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`status`]: Operation status messages

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{AssignmentSummaries, Lectures, SolutionSteps, Subjects};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
