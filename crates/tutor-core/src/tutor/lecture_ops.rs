//! Lecture log operations for the Tutor.

use tokio::task;

use super::Tutor;
use crate::{
    db::Database,
    error::{Result, TutorError},
    models::Lecture,
    params::LogLecture,
};

impl Tutor {
    /// Records a lecture entry.
    pub async fn log_lecture(&self, params: &LogLecture) -> Result<Lecture> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let subject_id = params.subject_id;
        let held_at = params.held_at;
        let notes = params.notes.clone();

        if title.trim().is_empty() {
            return Err(TutorError::invalid_input("title", "Title must not be empty"));
        }

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.log_lecture(&title, subject_id, held_at, notes.as_deref())
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists lectures newest-first, optionally restricted to a subject.
    pub async fn list_lectures(&self, subject_id: Option<u64>) -> Result<crate::display::Lectures> {
        let db_path = self.db_path.clone();

        let lectures = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_lectures(subject_id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::Lectures(lectures))
    }
}
