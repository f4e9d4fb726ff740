//! Subject and topic operations for the Tutor.

use tokio::task;

use super::Tutor;
use crate::{
    db::Database,
    error::{Result, TutorError},
    models::{Subject, Topic},
    params::{CreateSubject, CreateTopic, Id},
};

impl Tutor {
    /// Creates a new subject.
    pub async fn create_subject(&self, params: &CreateSubject) -> Result<Subject> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let icon = params.icon.clone();

        if name.trim().is_empty() {
            return Err(TutorError::invalid_input("name", "Name must not be empty"));
        }

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_subject(&name, icon.as_deref())
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all subjects.
    pub async fn list_subjects(&self) -> Result<crate::display::Subjects> {
        let db_path = self.db_path.clone();

        let subjects = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_subjects()
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::Subjects(subjects))
    }

    /// Permanently deletes a subject and its topics.
    pub async fn delete_subject(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_subject(id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a topic under a subject.
    pub async fn create_topic(&self, params: &CreateTopic) -> Result<Topic> {
        let db_path = self.db_path.clone();
        let subject_id = params.subject_id;
        let name = params.name.clone();

        if name.trim().is_empty() {
            return Err(TutorError::invalid_input("name", "Name must not be empty"));
        }

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_topic(subject_id, &name)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the topics of a subject.
    pub async fn list_topics(&self, params: &Id) -> Result<Vec<Topic>> {
        let db_path = self.db_path.clone();
        let subject_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_topics(subject_id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a topic.
    pub async fn delete_topic(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_topic(id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
