//! Assignment CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::{Assignment, AssignmentFilter, AssignmentSummary, Priority},
};

const INSERT_ASSIGNMENT_SQL: &str = "INSERT INTO assignments (title, subject_id, due_at, priority, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)";
const SELECT_ASSIGNMENT_SQL: &str = "SELECT id, title, subject_id, due_at, priority, completed, created_at, updated_at FROM assignments WHERE id = ?1";
const CHECK_ASSIGNMENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM assignments WHERE id = ?1)";
const UPDATE_ASSIGNMENT_COMPLETED_SQL: &str =
    "UPDATE assignments SET completed = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_ASSIGNMENT_SQL: &str = "DELETE FROM assignments WHERE id = ?1";

const SUMMARY_COLUMNS: &str = "id, title, subject_id, due_at, priority, completed, created_at, updated_at, total_questions, completed_questions";
const SUMMARIES_VIEW: &str = "assignment_summaries";

fn parse_timestamp(value: String, column: usize) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn parse_priority(value: String, column: usize) -> rusqlite::Result<Priority> {
    value.parse::<Priority>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Text,
            format!("Invalid priority: {value}").into(),
        )
    })
}

impl super::Database {
    fn build_assignment_from_row(row: &rusqlite::Row) -> rusqlite::Result<Assignment> {
        Ok(Assignment {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            subject_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
            due_at: parse_timestamp(row.get::<_, String>(3)?, 3)?,
            priority: parse_priority(row.get::<_, String>(4)?, 4)?,
            completed: row.get(5)?,
            created_at: parse_timestamp(row.get::<_, String>(6)?, 6)?,
            updated_at: parse_timestamp(row.get::<_, String>(7)?, 7)?,
            questions: Vec::new(),
        })
    }

    /// Creates a new assignment.
    pub fn create_assignment(
        &mut self,
        title: &str,
        subject_id: Option<u64>,
        due_at: Timestamp,
        priority: Priority,
    ) -> Result<Assignment> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ASSIGNMENT_SQL,
            params![
                title,
                subject_id.map(|id| id as i64),
                due_at.to_string(),
                priority.as_str(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| TutorError::database_error("Failed to insert assignment", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Assignment {
            id,
            title: title.into(),
            subject_id,
            due_at,
            priority,
            completed: false,
            created_at: now,
            updated_at: now,
            questions: Vec::new(),
        })
    }

    /// Retrieves an assignment by its ID with questions and steps loaded.
    pub fn get_assignment(&self, id: u64) -> Result<Option<Assignment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ASSIGNMENT_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let mut assignment = stmt
            .query_row(params![id as i64], Self::build_assignment_from_row)
            .optional()
            .map_err(|e| TutorError::database_error("Failed to query assignment", e))?;

        if let Some(ref mut assignment) = assignment {
            assignment.questions = self.get_questions(assignment.id)?;
        }

        Ok(assignment)
    }

    /// Returns whether an assignment with the given ID exists.
    pub(crate) fn assignment_exists(
        conn: &rusqlite::Connection,
        assignment_id: u64,
    ) -> Result<bool> {
        conn.query_row(
            CHECK_ASSIGNMENT_EXISTS_SQL,
            params![assignment_id as i64],
            |row| row.get(0),
        )
        .db_context("Failed to check assignment existence")
    }

    /// Lists assignment summaries ordered by due date ascending.
    pub fn list_assignments(&self, filter: Option<&AssignmentFilter>) -> Result<Vec<AssignmentSummary>> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM {SUMMARIES_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(completed) = f.completed {
                conditions.push("completed = ?");
                params_vec.push(Box::new(completed));
            }

            if let Some(priority) = f.priority {
                conditions.push("priority = ?");
                params_vec.push(Box::new(priority.as_str().to_string()));
            }

            if let Some(subject_id) = f.subject_id {
                conditions.push("subject_id = ?");
                params_vec.push(Box::new(subject_id as i64));
            }

            if let Some(due_before) = f.due_before {
                conditions.push("due_at <= ?");
                params_vec.push(Box::new(due_before.to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY due_at ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], |row| {
                Ok(AssignmentSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    subject_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
                    due_at: parse_timestamp(row.get::<_, String>(3)?, 3)?,
                    priority: parse_priority(row.get::<_, String>(4)?, 4)?,
                    completed: row.get(5)?,
                    created_at: parse_timestamp(row.get::<_, String>(6)?, 6)?,
                    updated_at: parse_timestamp(row.get::<_, String>(7)?, 7)?,
                    total_questions: row.get::<_, i64>(8)? as u32,
                    completed_questions: row.get::<_, i64>(9)? as u32,
                })
            })
            .map_err(|e| TutorError::database_error("Failed to query assignments", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TutorError::database_error("Failed to fetch assignments", e))?;

        Ok(summaries)
    }

    /// Sets an assignment's completion flag.
    pub fn set_assignment_completed(&mut self, id: u64, completed: bool) -> Result<()> {
        let now_str = Timestamp::now().to_string();
        let rows = self
            .connection
            .execute(
                UPDATE_ASSIGNMENT_COMPLETED_SQL,
                params![completed, &now_str, id as i64],
            )
            .map_err(|e| TutorError::database_error("Failed to update assignment", e))?;

        if rows == 0 {
            return Err(TutorError::AssignmentNotFound { id });
        }

        Ok(())
    }

    /// Permanently deletes an assignment and all its questions and steps.
    pub fn delete_assignment(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists = Self::assignment_exists(&tx, id)?;
        if !exists {
            return Err(TutorError::AssignmentNotFound { id });
        }

        // Child questions and steps are removed by ON DELETE CASCADE
        tx.execute(DELETE_ASSIGNMENT_SQL, params![id as i64])
            .map_err(|e| TutorError::database_error("Failed to delete assignment", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
