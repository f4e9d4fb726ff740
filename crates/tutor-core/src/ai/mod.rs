//! Generative AI client abstraction.
//!
//! All AI-backed operations go through the [`GenerativeClient`] trait so
//! tests can substitute a scripted client and the coordinator never depends
//! on a concrete HTTP implementation.

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

/// A client capable of producing text completions.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generates a text completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generates a text completion for a prompt with an attached image.
    async fn generate_with_image(
        &self,
        prompt: &str,
        image_data: &[u8],
        mime_type: &str,
    ) -> Result<String>;
}
