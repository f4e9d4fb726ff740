//! The step-by-step solution workflow.
//!
//! Solving a question is an incremental dialogue: the tutor generates one
//! step at a time, and the student confirms each step before asking for the
//! next. The workflow state is never stored separately; it is derived from
//! the step rows, so a session can be resumed from any interface against
//! the same database.
//!
//! Generation follows read-prompt-write: the stored steps are read once,
//! the prompt is built from that snapshot, and the append is conditional on
//! the step count still matching the snapshot. A generation that loses the
//! race fails with a conflict instead of writing a step based on stale
//! context, and a failed model call writes nothing at all.

use tokio::task;

use super::Tutor;
use crate::{
    ai::prompts,
    db::Database,
    error::{Result, TutorError},
    models::{Question, SolutionStep},
    params::GenerateStep,
};

/// Workflow state of a question's solution, derived from its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// No steps have been generated yet.
    NotStarted,
    /// A step is waiting for the student's confirmation.
    AwaitingConfirmation {
        /// Number of the first unconfirmed step
        step_number: u32,
    },
    /// Every generated step is confirmed; the next step can be requested.
    ReadyForNext {
        /// Number of confirmed steps so far
        confirmed: u32,
    },
}

/// Derives the workflow state from a step sequence.
pub fn solver_state(steps: &[SolutionStep]) -> SolverState {
    if steps.is_empty() {
        return SolverState::NotStarted;
    }

    match steps.iter().find(|step| !step.confirmed) {
        Some(step) => SolverState::AwaitingConfirmation {
            step_number: step.step_number,
        },
        None => SolverState::ReadyForNext {
            confirmed: steps.len() as u32,
        },
    }
}

/// A resumable view of a question's solving session.
///
/// The cursor counts the confirmed prefix of the step sequence. It is a
/// pure projection of the stored steps; rebuilding the session from the
/// database always yields the same cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSession {
    /// ID of the question being solved
    pub question_id: u64,
    /// Length of the confirmed step prefix
    pub cursor: u32,
}

impl StepSession {
    /// Rebuilds the session from a question's stored steps.
    pub fn resume(question: &Question) -> Self {
        let cursor = question
            .steps
            .iter()
            .take_while(|step| step.confirmed)
            .count() as u32;

        Self {
            question_id: question.id,
            cursor,
        }
    }

    /// Derives the current workflow state.
    pub fn state(steps: &[SolutionStep]) -> SolverState {
        solver_state(steps)
    }

    /// Collects the explanations replayed as context for the next
    /// generation.
    pub fn context(steps: &[SolutionStep]) -> Vec<String> {
        steps.iter().map(|step| step.explanation.clone()).collect()
    }
}

impl Tutor {
    /// Generates the next solution step for a question.
    ///
    /// All stored steps are replayed as prompt context; with none, the model
    /// is asked for the first step. The append is conditional on the step
    /// count observed here, so two concurrent generations cannot both
    /// succeed: the loser gets [`TutorError::StepConflict`] and can retry
    /// against the fresh sequence. A model failure leaves the question
    /// unchanged.
    pub async fn generate_next_step(&self, params: &GenerateStep) -> Result<SolutionStep> {
        let question_id = params.question_id;
        let mode = params.mode;

        let db_path = self.db_path.clone();
        let question = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_question(question_id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??
        .ok_or(TutorError::QuestionNotFound { id: question_id })?;

        let expected_len = question.steps.len() as u32;
        let context = StepSession::context(&question.steps);
        let prompt = prompts::next_step(&question.content, mode, &context);

        log::debug!(
            "Generating step {} for question {question_id} in {} mode",
            expected_len + 1,
            mode.as_str()
        );

        let explanation = self.ai.generate(&prompt).await?;
        if explanation.trim().is_empty() {
            return Err(TutorError::ai_generation(
                "Model returned an empty step explanation",
            ));
        }

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.append_step(question_id, expected_len, &explanation, mode)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Confirms a solution step as understood.
    ///
    /// Confirmation is one-way and idempotent: confirming an already
    /// confirmed step returns it unchanged.
    pub async fn confirm_step(&self, question_id: u64, step_number: u32) -> Result<SolutionStep> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.confirm_step(question_id, step_number)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a question's steps in order.
    pub async fn get_steps(&self, question_id: u64) -> Result<crate::display::SolutionSteps> {
        let db_path = self.db_path.clone();

        let steps = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_steps(question_id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::SolutionSteps(steps))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::ExplanationMode;

    fn step(number: u32, confirmed: bool) -> SolutionStep {
        SolutionStep {
            id: number as u64,
            question_id: 1,
            step_number: number,
            explanation: format!("Step {number}"),
            confirmed,
            mode: ExplanationMode::Balanced,
            created_at: Timestamp::now(),
        }
    }

    fn question_with(steps: Vec<SolutionStep>) -> Question {
        Question {
            id: 1,
            assignment_id: 1,
            content: "Solve x^2 = 4".to_string(),
            image_ref: None,
            completed: false,
            position: 0,
            created_at: Timestamp::now(),
            steps,
        }
    }

    #[test]
    fn state_is_not_started_without_steps() {
        assert_eq!(solver_state(&[]), SolverState::NotStarted);
    }

    #[test]
    fn state_awaits_confirmation_on_unconfirmed_step() {
        let steps = vec![step(1, true), step(2, false)];
        assert_eq!(
            solver_state(&steps),
            SolverState::AwaitingConfirmation { step_number: 2 }
        );
    }

    #[test]
    fn state_is_ready_when_all_steps_confirmed() {
        let steps = vec![step(1, true), step(2, true)];
        assert_eq!(
            solver_state(&steps),
            SolverState::ReadyForNext { confirmed: 2 }
        );
    }

    #[test]
    fn resume_counts_confirmed_prefix() {
        let question = question_with(vec![step(1, true), step(2, true), step(3, false)]);
        let session = StepSession::resume(&question);
        assert_eq!(session.cursor, 2);
        assert_eq!(session.question_id, 1);
    }

    #[test]
    fn resume_is_stable_across_rebuilds() {
        let question = question_with(vec![step(1, true), step(2, false)]);
        assert_eq!(
            StepSession::resume(&question),
            StepSession::resume(&question.clone())
        );
    }

    #[test]
    fn context_replays_all_explanations_in_order() {
        let steps = vec![step(1, true), step(2, false)];
        assert_eq!(StepSession::context(&steps), vec!["Step 1", "Step 2"]);
    }
}
