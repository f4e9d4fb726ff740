//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TutorError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if image_ref column exists in questions table
        let has_image_ref_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('questions') WHERE name = 'image_ref'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add image_ref column if it doesn't exist
        if !has_image_ref_column {
            self.connection
                .execute("ALTER TABLE questions ADD COLUMN image_ref TEXT", [])
                .map_err(|e| {
                    TutorError::database_error(
                        "Failed to add image_ref column to questions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
