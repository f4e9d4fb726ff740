//! AI study aid operations: notes, practice questions, flashcards and weak
//! skill detection.
//!
//! These operations are stateless with respect to the database; they turn a
//! topic (and optional material) into model output and parse it into typed
//! results. Malformed model output parses to an empty result rather than an
//! error.

use super::Tutor;
use crate::{
    ai::prompts,
    error::{Result, TutorError},
    models::Flashcard,
    parse,
    params::{DetectWeakSkills, MakeFlashcards, PracticeQuestions, StudyNotes},
};

impl Tutor {
    /// Generates markdown study notes for a topic.
    pub async fn generate_study_notes(&self, params: &StudyNotes) -> Result<String> {
        if params.topic.trim().is_empty() {
            return Err(TutorError::invalid_input("topic", "Topic must not be empty"));
        }

        let prompt = prompts::study_notes(&params.topic, params.material.as_deref());
        self.ai.generate(&prompt).await
    }

    /// Generates practice questions for a topic.
    ///
    /// Weak skills, when provided, steer the questions toward those areas.
    pub async fn generate_practice_questions(
        &self,
        params: &PracticeQuestions,
    ) -> Result<Vec<String>> {
        if params.topic.trim().is_empty() {
            return Err(TutorError::invalid_input("topic", "Topic must not be empty"));
        }
        if params.count == 0 {
            return Err(TutorError::invalid_input(
                "count",
                "Count must be at least 1",
            ));
        }

        let prompt = prompts::practice_questions(
            &params.topic,
            params.difficulty,
            params.count,
            &params.weak_skills,
        );
        let response = self.ai.generate(&prompt).await?;

        Ok(parse::split_numbered(&response))
    }

    /// Generates flashcards for a topic.
    pub async fn generate_flashcards(&self, params: &MakeFlashcards) -> Result<Vec<Flashcard>> {
        if params.topic.trim().is_empty() {
            return Err(TutorError::invalid_input("topic", "Topic must not be empty"));
        }

        let prompt = prompts::flashcards(&params.topic, params.material.as_deref(), params.count);
        let response = self.ai.generate(&prompt).await?;

        Ok(parse::parse_flashcards(&response))
    }

    /// Detects weak skills from incorrect test answers.
    pub async fn detect_weak_skills(&self, params: &DetectWeakSkills) -> Result<Vec<String>> {
        if params.incorrect_answers.is_empty() {
            return Err(TutorError::invalid_input(
                "incorrect_answers",
                "At least one incorrect answer is required",
            ));
        }

        let prompt = prompts::weak_skills(&params.topic, &params.incorrect_answers);
        let response = self.ai.generate(&prompt).await?;

        Ok(parse::parse_skill_lines(&response))
    }
}
