use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fridge_analysis::ports::LLMClient,
    recipe::{ports::RecipeCorpusProvider, value_objects::MatchThreshold},
};

/// Holds the injected collaborators every domain service is implemented on.
pub struct Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    pub(crate) corpus_provider: Arc<RC>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) default_threshold: MatchThreshold,
}

impl<RC, LLM> Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    pub fn new(corpus_provider: RC, llm_client: LLM, default_threshold: MatchThreshold) -> Self {
        Self {
            corpus_provider: Arc::new(corpus_provider),
            llm_client: Arc::new(llm_client),
            default_threshold,
        }
    }

    pub fn default_threshold(&self) -> MatchThreshold {
        self.default_threshold
    }

    /// Falls back to the configured threshold when the caller did not ask for one.
    pub(crate) fn resolve_threshold(
        &self,
        requested: Option<f64>,
    ) -> Result<MatchThreshold, CoreError> {
        match requested {
            Some(value) => MatchThreshold::new(value),
            None => Ok(self.default_threshold),
        }
    }
}

impl<RC, LLM> Clone for Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            corpus_provider: Arc::clone(&self.corpus_provider),
            llm_client: Arc::clone(&self.llm_client),
            default_threshold: self.default_threshold,
        }
    }
}
