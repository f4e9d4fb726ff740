//! Subject and topic queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::{Subject, Topic},
};

const INSERT_SUBJECT_SQL: &str =
    "INSERT INTO subjects (name, icon, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SUBJECTS_SQL: &str =
    "SELECT id, name, icon, created_at, updated_at FROM subjects ORDER BY name";
const CHECK_SUBJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM subjects WHERE id = ?1)";
const DELETE_SUBJECT_SQL: &str = "DELETE FROM subjects WHERE id = ?1";

const INSERT_TOPIC_SQL: &str =
    "INSERT INTO topics (subject_id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TOPICS_BY_SUBJECT_SQL: &str =
    "SELECT id, subject_id, name, created_at, updated_at FROM topics WHERE subject_id = ?1 ORDER BY name";
const DELETE_TOPIC_SQL: &str = "DELETE FROM topics WHERE id = ?1";

fn parse_timestamp(value: String, column: usize) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Creates a new subject.
    pub fn create_subject(&mut self, name: &str, icon: Option<&str>) -> Result<Subject> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(INSERT_SUBJECT_SQL, params![name, icon, &now_str, &now_str])
            .map_err(|e| TutorError::database_error("Failed to insert subject", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Subject {
            id,
            name: name.into(),
            icon: icon.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Lists all subjects alphabetically.
    pub fn list_subjects(&self) -> Result<Vec<Subject>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUBJECTS_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let subjects = stmt
            .query_map([], |row| {
                Ok(Subject {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    icon: row.get(2)?,
                    created_at: parse_timestamp(row.get::<_, String>(3)?, 3)?,
                    updated_at: parse_timestamp(row.get::<_, String>(4)?, 4)?,
                })
            })
            .map_err(|e| TutorError::database_error("Failed to query subjects", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TutorError::database_error("Failed to fetch subjects", e))?;

        Ok(subjects)
    }

    pub(crate) fn subject_exists(conn: &rusqlite::Connection, subject_id: u64) -> Result<bool> {
        conn.query_row(CHECK_SUBJECT_EXISTS_SQL, params![subject_id as i64], |row| {
            row.get(0)
        })
        .db_context("Failed to check subject existence")
    }

    /// Permanently deletes a subject and its topics.
    ///
    /// Assignments and lectures that referenced the subject keep existing
    /// with their subject cleared.
    pub fn delete_subject(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists = Self::subject_exists(&tx, id)?;
        if !exists {
            return Err(TutorError::SubjectNotFound { id });
        }

        // Topics cascade; assignment and lecture references are set to NULL
        tx.execute(DELETE_SUBJECT_SQL, params![id as i64])
            .map_err(|e| TutorError::database_error("Failed to delete subject", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Creates a new topic under a subject.
    pub fn create_topic(&mut self, subject_id: u64, name: &str) -> Result<Topic> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists = Self::subject_exists(&tx, subject_id)?;
        if !exists {
            return Err(TutorError::SubjectNotFound { id: subject_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TOPIC_SQL,
            params![subject_id as i64, name, &now_str, &now_str],
        )
        .map_err(|e| TutorError::database_error("Failed to insert topic", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Topic {
            id,
            subject_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Lists the topics of a subject alphabetically.
    pub fn list_topics(&self, subject_id: u64) -> Result<Vec<Topic>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TOPICS_BY_SUBJECT_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let topics = stmt
            .query_map(params![subject_id as i64], |row| {
                Ok(Topic {
                    id: row.get::<_, i64>(0)? as u64,
                    subject_id: row.get::<_, i64>(1)? as u64,
                    name: row.get(2)?,
                    created_at: parse_timestamp(row.get::<_, String>(3)?, 3)?,
                    updated_at: parse_timestamp(row.get::<_, String>(4)?, 4)?,
                })
            })
            .map_err(|e| TutorError::database_error("Failed to query topics", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TutorError::database_error("Failed to fetch topics", e))?;

        Ok(topics)
    }

    /// Deletes a topic by its ID.
    pub fn delete_topic(&mut self, id: u64) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_TOPIC_SQL, params![id as i64])
            .map_err(|e| TutorError::database_error("Failed to delete topic", e))?;

        if rows == 0 {
            return Err(TutorError::invalid_input("topic", format!("No topic with ID {id}")));
        }

        Ok(())
    }
}
