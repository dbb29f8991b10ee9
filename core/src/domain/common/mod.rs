use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SnapChefConfig {
    pub llm: LLMConfig,
    pub corpus: CorpusConfig,
    pub matching: MatchingConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct CorpusConfig {
    pub recipes_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct MatchingConfig {
    pub default_threshold: f64,
}
