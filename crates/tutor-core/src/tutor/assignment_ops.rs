//! Assignment operations for the Tutor.

use tokio::task;

use super::Tutor;
use crate::{
    db::Database,
    error::{Result, TutorError},
    models::{Assignment, AssignmentFilter},
    params::{CreateAssignment, Id, ListAssignments},
};

impl Tutor {
    /// Creates a new assignment.
    pub async fn create_assignment(&self, params: &CreateAssignment) -> Result<Assignment> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let subject_id = params.subject_id;
        let due_at = params.due_at;
        let priority = params.priority;

        if title.trim().is_empty() {
            return Err(TutorError::invalid_input("title", "Title must not be empty"));
        }

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_assignment(&title, subject_id, due_at, priority)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an assignment with its questions and steps.
    pub async fn get_assignment(&self, params: &Id) -> Result<Option<Assignment>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_assignment(id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists assignment summaries, pending-only unless `all` is set.
    pub async fn list_assignments(
        &self,
        params: &ListAssignments,
    ) -> Result<crate::display::AssignmentSummaries> {
        let db_path = self.db_path.clone();

        let mut filter = if params.all {
            AssignmentFilter::default()
        } else {
            AssignmentFilter::pending()
        };
        filter.subject_id = params.subject_id;
        filter.priority = params.priority;

        let summaries = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_assignments(Some(&filter))
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::AssignmentSummaries(summaries))
    }

    /// Marks an assignment as completed.
    pub async fn complete_assignment(&self, params: &Id) -> Result<()> {
        self.set_assignment_completed(params.id, true).await
    }

    /// Reopens a previously completed assignment.
    pub async fn reopen_assignment(&self, params: &Id) -> Result<()> {
        self.set_assignment_completed(params.id, false).await
    }

    async fn set_assignment_completed(&self, id: u64, completed: bool) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_assignment_completed(id, completed)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes an assignment and all its questions and steps.
    pub async fn delete_assignment(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_assignment(id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
