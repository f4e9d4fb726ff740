//! Preference operations for the Tutor.
//!
//! Preferences are free-form key-value pairs; interface layers decide which
//! keys they care about (the CLI uses `mode` for the default explanation
//! mode).

use tokio::task;

use super::Tutor;
use crate::{
    db::Database,
    error::{Result, TutorError},
};

impl Tutor {
    /// Retrieves a preference value, or `None` if unset.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_setting(&key)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Stores a preference value.
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_setting(&key, &value)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a preference if present.
    pub async fn unset_preference(&self, key: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.unset_setting(&key)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
