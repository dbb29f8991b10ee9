use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fridge_analysis::{
        entities::FridgeAnalysis,
        ports::{FridgeAnalysisService, LLMClient},
        prompts::{FRIDGE_INVENTORY_PROMPT, is_refusal, recipe_suggestion_prompt},
        value_objects::{AnalyzeFridgeInput, SuggestRecipesInput},
    },
    recipe::{
        matcher::{filter_recipes, parse_ingredients},
        ports::RecipeCorpusProvider,
    },
};

impl<RC, LLM> FridgeAnalysisService for Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    async fn analyze_fridge(&self, input: AnalyzeFridgeInput) -> Result<FridgeAnalysis, CoreError> {
        if input.image.data.is_empty() {
            return Err(CoreError::Invalid);
        }

        // 1. Resolve threshold up front so a bad value costs no model call
        let threshold = self.resolve_threshold(input.threshold)?;

        // 2. Describe the image
        let foods_txt = self
            .llm_client
            .generate_with_image(FRIDGE_INVENTORY_PROMPT.to_string(), input.image)
            .await?;

        if is_refusal(&foods_txt) {
            tracing::warn!("model declined to describe the uploaded image");
            return Ok(FridgeAnalysis::unrecognized(threshold));
        }

        // 3. Match against the corpus
        let ingredients = parse_ingredients(&foods_txt);
        let corpus = self.corpus_provider.load_recipes().await?;
        let matched_recipes = filter_recipes(&ingredients, &corpus, threshold);

        // 4. Free-form suggestions from the raw inventory text
        let ai_suggestions = self
            .llm_client
            .generate_with_text(recipe_suggestion_prompt(&foods_txt))
            .await?;

        tracing::info!(
            ingredients = ingredients.len(),
            matched = matched_recipes.len(),
            "fridge analysis completed"
        );

        Ok(FridgeAnalysis::new(
            foods_txt,
            ingredients,
            matched_recipes,
            ai_suggestions,
            threshold,
        ))
    }

    async fn suggest_recipes(&self, input: SuggestRecipesInput) -> Result<String, CoreError> {
        if input.fridge_contents.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        self.llm_client
            .generate_with_text(recipe_suggestion_prompt(&input.fridge_contents))
            .await
    }
}
