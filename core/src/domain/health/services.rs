use chrono::Utc;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fridge_analysis::ports::LLMClient,
    health::{entities::CorpusHealthStatus, ports::HealthCheckService},
    recipe::ports::RecipeCorpusProvider,
};

impl<RC, LLM> HealthCheckService for Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    async fn readiness(&self) -> Result<CorpusHealthStatus, CoreError> {
        let recipes = self.corpus_provider.load_recipes().await?;

        Ok(CorpusHealthStatus {
            status: "ok".to_string(),
            recipe_count: recipes.len(),
            checked_at: Utc::now(),
        })
    }
}
