//! Solution step queries: the persistence half of the step solver.
//!
//! Steps are stored as addressable rows rather than an embedded array, so a
//! confirmation touches exactly one row and an append never rewrites the
//! rest of the sequence. `append_step` is conditional on the stored sequence
//! length, which keeps step numbers contiguous even if two writers race.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TutorError},
    models::{ExplanationMode, SolutionStep},
};

const CHECK_QUESTION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?1)";
const COUNT_STEPS_SQL: &str = "SELECT COUNT(*) FROM solution_steps WHERE question_id = ?1";
const INSERT_STEP_SQL: &str = "INSERT INTO solution_steps (question_id, step_number, explanation, confirmed, mode, created_at) VALUES (?1, ?2, ?3, 0, ?4, ?5)";
const SELECT_STEPS_BY_QUESTION_SQL: &str = "SELECT id, question_id, step_number, explanation, confirmed, mode, created_at FROM solution_steps WHERE question_id = ?1 ORDER BY step_number";
const SELECT_STEP_SQL: &str = "SELECT id, question_id, step_number, explanation, confirmed, mode, created_at FROM solution_steps WHERE question_id = ?1 AND step_number = ?2";
const CONFIRM_STEP_SQL: &str = "UPDATE solution_steps SET confirmed = 1 WHERE question_id = ?1 AND step_number = ?2 AND confirmed = 0";
const UPDATE_ASSIGNMENT_TIMESTAMP_BY_QUESTION_SQL: &str = "UPDATE assignments SET updated_at = ?1 WHERE id = (SELECT assignment_id FROM questions WHERE id = ?2)";

impl super::Database {
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<SolutionStep> {
        let mode_str: String = row.get(5)?;
        let mode = mode_str.parse::<ExplanationMode>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid explanation mode: {mode_str}").into(),
            )
        })?;

        Ok(SolutionStep {
            id: row.get::<_, i64>(0)? as u64,
            question_id: row.get::<_, i64>(1)? as u64,
            step_number: row.get::<_, i64>(2)? as u32,
            explanation: row.get(3)?,
            confirmed: row.get(4)?,
            mode,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Retrieves all steps for a question in step-number order.
    pub fn get_steps(&self, question_id: u64) -> Result<Vec<SolutionStep>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_BY_QUESTION_SQL)
            .map_err(|e| TutorError::database_error("Failed to prepare query", e))?;

        let steps = stmt
            .query_map(params![question_id as i64], Self::build_step_from_row)
            .map_err(|e| TutorError::database_error("Failed to query steps", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TutorError::database_error("Failed to fetch steps", e))?;

        Ok(steps)
    }

    /// Appends a new unconfirmed step, conditional on the sequence length.
    ///
    /// The transaction re-counts the stored steps and aborts with
    /// [`TutorError::StepConflict`] when the count no longer equals
    /// `expected_len`, so a caller that raced another append cannot create a
    /// duplicate step number. On success the new step carries number
    /// `expected_len + 1`.
    pub fn append_step(
        &mut self,
        question_id: u64,
        expected_len: u32,
        explanation: &str,
        mode: ExplanationMode,
    ) -> Result<SolutionStep> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let question_exists: bool = tx
            .query_row(CHECK_QUESTION_EXISTS_SQL, params![question_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TutorError::database_error("Failed to check question existence", e))?;

        if !question_exists {
            return Err(TutorError::QuestionNotFound { id: question_id });
        }

        let stored_len: i64 = tx
            .query_row(COUNT_STEPS_SQL, params![question_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TutorError::database_error("Failed to count steps", e))?;

        if stored_len as u32 != expected_len {
            return Err(TutorError::StepConflict {
                question_id,
                expected: expected_len,
                actual: stored_len as u32,
            });
        }

        let step_number = expected_len + 1;
        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_STEP_SQL,
            params![
                question_id as i64,
                step_number as i64,
                explanation,
                mode.as_str(),
                &now_str
            ],
        )
        .map_err(|e| TutorError::database_error("Failed to insert step", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            UPDATE_ASSIGNMENT_TIMESTAMP_BY_QUESTION_SQL,
            params![&now_str, question_id as i64],
        )
        .map_err(|e| TutorError::database_error("Failed to update assignment timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SolutionStep {
            id,
            question_id,
            step_number,
            explanation: explanation.into(),
            confirmed: false,
            mode,
            created_at: now,
        })
    }

    /// Confirms a step, transitioning `confirmed` from false to true.
    ///
    /// The transition is one-way: an already confirmed step is returned
    /// unchanged. Returns [`TutorError::StepNotFound`] if the step does not
    /// exist.
    pub fn confirm_step(&mut self, question_id: u64, step_number: u32) -> Result<SolutionStep> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            CONFIRM_STEP_SQL,
            params![question_id as i64, step_number as i64],
        )
        .map_err(|e| TutorError::database_error("Failed to confirm step", e))?;

        let step = tx
            .query_row(
                SELECT_STEP_SQL,
                params![question_id as i64, step_number as i64],
                Self::build_step_from_row,
            )
            .optional()
            .map_err(|e| TutorError::database_error("Failed to query confirmed step", e))?
            .ok_or(TutorError::StepNotFound {
                question_id,
                step_number,
            })?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_ASSIGNMENT_TIMESTAMP_BY_QUESTION_SQL,
            params![&now_str, question_id as i64],
        )
        .map_err(|e| TutorError::database_error("Failed to update assignment timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(step)
    }
}
