use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{MatchRecipesInput, RecipeMatches},
    },
};

/// Source of the recipe corpus (flat file, database...).
///
/// Implementations report unreadable or malformed data as
/// [`CoreError::CorpusUnavailable`], never as an empty corpus.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCorpusProvider: Send + Sync {
    fn load_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn match_recipes(
        &self,
        input: MatchRecipesInput,
    ) -> impl Future<Output = Result<RecipeMatches, CoreError>> + Send;

    fn get_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
