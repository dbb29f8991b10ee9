use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fridge_analysis::ports::LLMClient,
    recipe::{
        entities::Recipe,
        matcher::{filter_recipes, parse_ingredients},
        ports::{RecipeCorpusProvider, RecipeService},
        value_objects::{MatchRecipesInput, RecipeMatches},
    },
};

impl<RC, LLM> RecipeService for Service<RC, LLM>
where
    RC: RecipeCorpusProvider,
    LLM: LLMClient,
{
    async fn match_recipes(&self, input: MatchRecipesInput) -> Result<RecipeMatches, CoreError> {
        let threshold = self.resolve_threshold(input.threshold)?;
        let ingredients = parse_ingredients(&input.fridge_contents);

        let corpus = self.corpus_provider.load_recipes().await?;
        let recipes = filter_recipes(&ingredients, &corpus, threshold);

        tracing::debug!(
            ingredients = ingredients.len(),
            corpus = corpus.len(),
            matched = recipes.len(),
            "matched fridge contents against recipe corpus"
        );

        Ok(RecipeMatches {
            ingredients,
            recipes,
            threshold: threshold.value(),
        })
    }

    async fn get_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.corpus_provider.load_recipes().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        fridge_analysis::ports::MockLLMClient,
        recipe::{ports::MockRecipeCorpusProvider, value_objects::MatchThreshold},
    };

    fn corpus() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "r1",
                "Pancakes",
                vec!["milk".into(), "eggs".into(), "flour".into()],
                vec!["Mix".into(), "Fry".into()],
            ),
            Recipe::new(
                "r2",
                "Steak",
                vec!["beef".into(), "salt".into()],
                vec!["Grill".into()],
            ),
        ]
    }

    fn service(
        provider: MockRecipeCorpusProvider,
    ) -> Service<MockRecipeCorpusProvider, MockLLMClient> {
        Service::new(provider, MockLLMClient::new(), MatchThreshold::default())
    }

    #[tokio::test]
    async fn test_match_recipes_uses_default_threshold() {
        let mut provider = MockRecipeCorpusProvider::new();
        provider
            .expect_load_recipes()
            .times(1)
            .returning(|| Box::pin(async { Ok(corpus()) }));

        let result = service(provider)
            .match_recipes(MatchRecipesInput {
                fridge_contents: "Milk, Eggs, Flour, Butter".to_string(),
                threshold: None,
            })
            .await
            .unwrap();

        assert_eq!(result.ingredients, vec!["milk", "eggs", "flour", "butter"]);
        assert_eq!(result.threshold, 0.8);
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].id, "r1");
    }

    #[tokio::test]
    async fn test_match_recipes_with_requested_threshold() {
        let mut provider = MockRecipeCorpusProvider::new();
        provider
            .expect_load_recipes()
            .returning(|| Box::pin(async { Ok(corpus()) }));

        let result = service(provider)
            .match_recipes(MatchRecipesInput {
                fridge_contents: "salt".to_string(),
                threshold: Some(0.5),
            })
            .await
            .unwrap();

        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].id, "r2");
    }

    #[tokio::test]
    async fn test_match_recipes_rejects_invalid_threshold_before_loading() {
        let mut provider = MockRecipeCorpusProvider::new();
        provider.expect_load_recipes().never();

        let err = service(provider)
            .match_recipes(MatchRecipesInput {
                fridge_contents: "milk".to_string(),
                threshold: Some(1.5),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidThreshold(1.5));
    }

    #[tokio::test]
    async fn test_match_recipes_propagates_corpus_failure() {
        let mut provider = MockRecipeCorpusProvider::new();
        provider.expect_load_recipes().returning(|| {
            Box::pin(async { Err(CoreError::CorpusUnavailable("bad json".to_string())) })
        });

        let err = service(provider)
            .match_recipes(MatchRecipesInput {
                fridge_contents: "milk".to_string(),
                threshold: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::CorpusUnavailable(_)));
    }
}
