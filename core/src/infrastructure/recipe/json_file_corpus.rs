use std::path::{Path, PathBuf};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeCorpusProvider},
    },
    infrastructure::recipe::mappers::{RecipeDocument, recipes_from_documents},
};

/// Reads the corpus from a JSON array on disk. The file is read on every call,
/// so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileRecipeCorpus {
    path: PathBuf,
}

impl JsonFileRecipeCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeCorpusProvider for JsonFileRecipeCorpus {
    async fn load_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!("Failed to read recipe corpus {}: {}", self.path.display(), e);
            CoreError::CorpusUnavailable(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let documents: Vec<RecipeDocument> = serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!("Malformed recipe corpus {}: {}", self.path.display(), e);
            CoreError::CorpusUnavailable(format!("malformed {}: {}", self.path.display(), e))
        })?;

        Ok(recipes_from_documents(documents))
    }
}
