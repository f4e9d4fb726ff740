//! Key-value settings storage.

use rusqlite::{params, OptionalExtension};

use crate::error::{Result, TutorError};

const GET_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_SETTING_SQL: &str = "DELETE FROM settings WHERE key = ?1";

impl super::Database {
    /// Retrieves a setting value, or `None` if the key is unset.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(GET_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .map_err(|e| TutorError::database_error("Failed to get setting", e))
    }

    /// Stores a setting value, replacing any previous value for the key.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value])
            .map_err(|e| TutorError::database_error("Failed to set setting", e))?;

        Ok(())
    }

    /// Removes a setting if present.
    pub fn unset_setting(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SETTING_SQL, params![key])
            .map_err(|e| TutorError::database_error("Failed to delete setting", e))?;

        Ok(())
    }
}
