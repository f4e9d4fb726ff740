//! Builder for creating and configuring Tutor instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Tutor;
use crate::{
    ai::{GeminiClient, GenerativeClient},
    db::Database,
    error::{Result, TutorError},
};

/// Builder for creating and configuring Tutor instances.
pub struct TutorBuilder {
    database_path: Option<PathBuf>,
    ai_client: Option<Arc<dyn GenerativeClient>>,
}

impl TutorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            ai_client: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tutor/tutor.db` or `~/.local/share/tutor/tutor.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generative AI client.
    ///
    /// If not specified, a [`GeminiClient`] configured from the environment
    /// is used.
    pub fn with_ai_client(mut self, client: Arc<dyn GenerativeClient>) -> Self {
        self.ai_client = Some(client);
        self
    }

    /// Builds the configured tutor instance.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::FileSystem` if the database path is invalid
    /// Returns `TutorError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tutor> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TutorError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TutorError>(())
        })
        .await
        .map_err(|e| TutorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let ai = match self.ai_client {
            Some(client) => client,
            None => Arc::new(GeminiClient::from_env()?),
        };

        Ok(Tutor::new(db_path, ai))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tutor")
            .place_data_file("tutor.db")
            .map_err(|e| TutorError::XdgDirectory(e.to_string()))
    }
}

impl Default for TutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
