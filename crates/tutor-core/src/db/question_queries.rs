//! Question CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::Question,
};

const GET_NEXT_POSITION_SQL: &str =
    "SELECT COALESCE(MAX(position), -1) + 1 FROM questions WHERE assignment_id = ?1";
const INSERT_QUESTION_SQL: &str = "INSERT INTO questions (assignment_id, content, image_ref, completed, position, created_at) VALUES (?1, ?2, ?3, 0, ?4, ?5)";
const UPDATE_ASSIGNMENT_TIMESTAMP_SQL: &str =
    "UPDATE assignments SET updated_at = ?1 WHERE id = ?2";
const SELECT_QUESTIONS_BY_ASSIGNMENT_SQL: &str = "SELECT id, assignment_id, content, image_ref, completed, position, created_at FROM questions WHERE assignment_id = ?1 ORDER BY position";
const SELECT_QUESTION_BY_ID_SQL: &str = "SELECT id, assignment_id, content, image_ref, completed, position, created_at FROM questions WHERE id = ?1";
const UPDATE_QUESTION_COMPLETED_SQL: &str = "UPDATE questions SET completed = ?1 WHERE id = ?2";
const UPDATE_ASSIGNMENT_TIMESTAMP_BY_QUESTION_SQL: &str = "UPDATE assignments SET updated_at = ?1 WHERE id = (SELECT assignment_id FROM questions WHERE id = ?2)";

impl super::Database {
    fn build_question_from_row(row: &rusqlite::Row) -> rusqlite::Result<Question> {
        Ok(Question {
            id: row.get::<_, i64>(0)? as u64,
            assignment_id: row.get::<_, i64>(1)? as u64,
            content: row.get(2)?,
            image_ref: row.get(3)?,
            completed: row.get(4)?,
            position: row.get::<_, i64>(5)? as u32,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            steps: Vec::new(),
        })
    }

    /// Appends a question to the end of an assignment's question sequence.
    pub fn add_question(
        &mut self,
        assignment_id: u64,
        content: &str,
        image_ref: Option<&str>,
    ) -> Result<Question> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists = Self::assignment_exists(&tx, assignment_id)?;
        if !exists {
            return Err(TutorError::AssignmentNotFound { id: assignment_id });
        }

        let position: i64 = tx
            .query_row(GET_NEXT_POSITION_SQL, params![assignment_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TutorError::database_error("Failed to get next question position", e))?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_QUESTION_SQL,
            params![
                assignment_id as i64,
                content,
                image_ref,
                position,
                &now_str
            ],
        )
        .map_err(|e| TutorError::database_error("Failed to insert question", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            UPDATE_ASSIGNMENT_TIMESTAMP_SQL,
            params![&now_str, assignment_id as i64],
        )
        .map_err(|e| TutorError::database_error("Failed to update assignment timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Question {
            id,
            assignment_id,
            content: content.into(),
            image_ref: image_ref.map(String::from),
            completed: false,
            position: position as u32,
            created_at: now,
            steps: Vec::new(),
        })
    }

    /// Retrieves all questions of an assignment with their steps loaded.
    pub fn get_questions(&self, assignment_id: u64) -> Result<Vec<Question>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_QUESTIONS_BY_ASSIGNMENT_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let mut questions = stmt
            .query_map(params![assignment_id as i64], Self::build_question_from_row)
            .map_err(|e| TutorError::database_error("Failed to query questions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TutorError::database_error("Failed to fetch questions", e))?;

        for question in &mut questions {
            question.steps = self.get_steps(question.id)?;
        }

        Ok(questions)
    }

    /// Retrieves a single question by its ID with steps loaded.
    pub fn get_question(&self, question_id: u64) -> Result<Option<Question>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_QUESTION_BY_ID_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let mut question = stmt
            .query_row(params![question_id as i64], Self::build_question_from_row)
            .optional()
            .map_err(|e| TutorError::database_error("Failed to get question", e))?;

        if let Some(ref mut question) = question {
            question.steps = self.get_steps(question.id)?;
        }

        Ok(question)
    }

    /// Sets a question's completion flag.
    pub fn set_question_completed(&mut self, question_id: u64, completed: bool) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows = tx
            .execute(
                UPDATE_QUESTION_COMPLETED_SQL,
                params![completed, question_id as i64],
            )
            .map_err(|e| TutorError::database_error("Failed to update question", e))?;

        if rows == 0 {
            return Err(TutorError::QuestionNotFound { id: question_id });
        }

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_ASSIGNMENT_TIMESTAMP_BY_QUESTION_SQL,
            params![&now_str, question_id as i64],
        )
        .map_err(|e| TutorError::database_error("Failed to update assignment timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
