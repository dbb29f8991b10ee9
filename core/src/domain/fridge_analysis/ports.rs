use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fridge_analysis::{
        entities::FridgeAnalysis,
        value_objects::{AnalyzeFridgeInput, ImageInput, SuggestRecipesInput},
    },
};

/// LLM Client trait for calling multimodal generative models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the photo-to-recipes flow
#[cfg_attr(test, mockall::automock)]
pub trait FridgeAnalysisService: Send + Sync {
    fn analyze_fridge(
        &self,
        input: AnalyzeFridgeInput,
    ) -> impl Future<Output = Result<FridgeAnalysis, CoreError>> + Send;

    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
