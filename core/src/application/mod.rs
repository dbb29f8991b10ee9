use crate::{
    domain::{
        common::{SnapChefConfig, services::Service},
        recipe::value_objects::MatchThreshold,
    },
    infrastructure::{llm::GeminiLLMClient, recipe::JsonFileRecipeCorpus},
};

pub type SnapChefService = Service<JsonFileRecipeCorpus, GeminiLLMClient>;

pub fn create_service(config: SnapChefConfig) -> Result<SnapChefService, anyhow::Error> {
    let default_threshold = MatchThreshold::new(config.matching.default_threshold)?;
    let corpus = JsonFileRecipeCorpus::new(config.corpus.recipes_path);
    let llm_client = GeminiLLMClient::from(config.llm);

    tracing::info!(
        corpus = %corpus.path().display(),
        threshold = default_threshold.value(),
        "snap chef service created"
    );

    Ok(Service::new(corpus, llm_client, default_threshold))
}
