use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tutor_core::{error::TutorError, GenerativeClient, Tutor, TutorBuilder};

/// Scripted generative client for tests.
///
/// Returns queued responses in order and records every prompt it receives.
/// An exhausted queue or a queued `Err` yields an `AiGeneration` error.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self, prompt: &str) -> Result<String, TutorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(TutorError::ai_generation(message)),
            None => Err(TutorError::ai_generation("No scripted response left")),
        }
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, TutorError> {
        self.next_response(prompt)
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        _image_data: &[u8],
        _mime_type: &str,
    ) -> Result<String, TutorError> {
        self.next_response(prompt)
    }
}

/// Helper function to create a test tutor backed by a scripted AI client.
pub async fn create_test_tutor(
    responses: Vec<Result<String, String>>,
) -> (TempDir, Tutor, Arc<ScriptedClient>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let client = Arc::new(ScriptedClient::new(responses));
    let tutor = TutorBuilder::new()
        .with_database_path(Some(&db_path))
        .with_ai_client(client.clone())
        .build()
        .await
        .expect("Failed to create tutor");
    (temp_dir, tutor, client)
}
