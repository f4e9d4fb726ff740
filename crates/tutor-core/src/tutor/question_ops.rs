//! Question operations for the Tutor, including image extraction.

use tokio::task;

use super::Tutor;
use crate::{
    ai::prompts,
    db::Database,
    error::{Result, TutorError},
    models::Question,
    parse,
    params::{AddQuestion, ExtractQuestions, Id},
};

fn mime_type_for_path(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

impl Tutor {
    /// Adds a question to the end of an assignment.
    pub async fn add_question(&self, params: &AddQuestion) -> Result<Question> {
        let db_path = self.db_path.clone();
        let assignment_id = params.assignment_id;
        let content = params.content.clone();
        let image_ref = params.image_ref.clone();

        if content.trim().is_empty() {
            return Err(TutorError::invalid_input(
                "content",
                "Question content must not be empty",
            ));
        }

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_question(assignment_id, &content, image_ref.as_deref())
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a single question with its steps.
    pub async fn get_question(&self, params: &Id) -> Result<Option<Question>> {
        let db_path = self.db_path.clone();
        let question_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_question(question_id)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a question as completed.
    pub async fn complete_question(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let question_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_question_completed(question_id, true)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Extracts questions from a photographed worksheet and appends them to
    /// an assignment.
    ///
    /// The image is sent to the multimodal model with an extraction prompt;
    /// the numbered-list response is split into individual questions, each
    /// stored with the image path recorded as its source. A response with no
    /// recognizable numbering yields no questions and no writes.
    pub async fn extract_questions(&self, params: &ExtractQuestions) -> Result<Vec<Question>> {
        let image_path = params.image_path.clone();
        let assignment_id = params.assignment_id;

        // Verify the target exists before spending a model call
        let db_path = self.db_path.clone();
        let exists = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok::<bool, TutorError>(db.get_assignment(assignment_id)?.is_some())
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        if !exists {
            return Err(TutorError::AssignmentNotFound { id: assignment_id });
        }

        let image_data =
            tokio::fs::read(&image_path)
                .await
                .map_err(|e| TutorError::FileSystem {
                    path: image_path.clone().into(),
                    source: e,
                })?;

        let prompt = prompts::extract_questions();
        let mime_type = mime_type_for_path(&image_path);
        let response = self
            .ai
            .generate_with_image(&prompt, &image_data, mime_type)
            .await?;

        let extracted = parse::split_numbered(&response);
        log::info!(
            "Extracted {} question(s) from {image_path}",
            extracted.len()
        );

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut questions = Vec::with_capacity(extracted.len());
            for content in &extracted {
                questions.push(db.add_question(assignment_id, content, Some(&image_path))?);
            }
            Ok(questions)
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
