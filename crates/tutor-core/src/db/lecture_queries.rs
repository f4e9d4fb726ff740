//! Lecture log queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::Lecture,
};

const INSERT_LECTURE_SQL: &str = "INSERT INTO lectures (title, subject_id, held_at, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_LECTURES_SQL: &str = "SELECT id, title, subject_id, held_at, notes, created_at FROM lectures ORDER BY held_at DESC";
const SELECT_LECTURES_BY_SUBJECT_SQL: &str = "SELECT id, title, subject_id, held_at, notes, created_at FROM lectures WHERE subject_id = ?1 ORDER BY held_at DESC";

fn parse_timestamp(value: String, column: usize) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn build_lecture_from_row(row: &rusqlite::Row) -> rusqlite::Result<Lecture> {
    Ok(Lecture {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        subject_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
        held_at: parse_timestamp(row.get::<_, String>(3)?, 3)?,
        notes: row.get(4)?,
        created_at: parse_timestamp(row.get::<_, String>(5)?, 5)?,
    })
}

impl super::Database {
    /// Records a lecture entry.
    pub fn log_lecture(
        &mut self,
        title: &str,
        subject_id: Option<u64>,
        held_at: Timestamp,
        notes: Option<&str>,
    ) -> Result<Lecture> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if let Some(subject_id) = subject_id {
            let exists = Self::subject_exists(&tx, subject_id)?;
            if !exists {
                return Err(TutorError::SubjectNotFound { id: subject_id });
            }
        }

        let now = Timestamp::now();

        tx.execute(
            INSERT_LECTURE_SQL,
            params![
                title,
                subject_id.map(|id| id as i64),
                held_at.to_string(),
                notes,
                now.to_string()
            ],
        )
        .map_err(|e| TutorError::database_error("Failed to insert lecture", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Lecture {
            id,
            title: title.into(),
            subject_id,
            held_at,
            notes: notes.map(String::from),
            created_at: now,
        })
    }

    /// Lists lectures newest-first, optionally restricted to a subject.
    pub fn list_lectures(&self, subject_id: Option<u64>) -> Result<Vec<Lecture>> {
        match subject_id {
            Some(subject_id) => {
                let mut stmt = self
                    .connection
                    .prepare(SELECT_LECTURES_BY_SUBJECT_SQL)
                    .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;
                let lectures = stmt
                    .query_map(params![subject_id as i64], build_lecture_from_row)
                    .map_err(|e| TutorError::database_error("Failed to query lectures", e))?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| TutorError::database_error("Failed to fetch lectures", e))?;
                Ok(lectures)
            }
            None => {
                let mut stmt = self
                    .connection
                    .prepare(SELECT_LECTURES_SQL)
                    .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;
                let lectures = stmt
                    .query_map([], build_lecture_from_row)
                    .map_err(|e| TutorError::database_error("Failed to query lectures", e))?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| TutorError::database_error("Failed to fetch lectures", e))?;
                Ok(lectures)
            }
        }
    }
}
