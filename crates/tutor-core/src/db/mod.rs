//! Database operations and SQLite management for the study domain.
//!
//! This module provides low-level database operations for subjects,
//! assignments, questions, solution steps, lectures, and settings. It
//! handles SQLite connections, schema management, and the transactional
//! write paths the step solver depends on.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod assignment_queries;
pub mod lecture_queries;
pub mod migrations;
pub mod question_queries;
pub mod settings_queries;
pub mod step_queries;
pub mod subject_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
