use axum::extract::State;
use serde::{Deserialize, Serialize};
use snapchef_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::MatchRecipesInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::MatchRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Recipe as exposed to clients: the corpus id and metadata stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<Recipe> for MatchedRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchRecipesResponse {
    pub ingredients: Vec<String>,
    pub matched_recipes: Vec<MatchedRecipe>,
    pub threshold: f64,
}

#[utoipa::path(
    post,
    path = "/match",
    tag = "recipe",
    summary = "Match recipes against a food list",
    description = "Parses a comma-separated food list and returns the corpus recipes whose ingredients are covered at or above the threshold. No AI call is made.",
    responses(
        (status = 200, body = MatchRecipesResponse)
    ),
    request_body = MatchRecipesRequest
)]
pub async fn match_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MatchRecipesRequest>,
) -> Result<Response<MatchRecipesResponse>, ApiError> {
    let matches = state
        .service
        .match_recipes(MatchRecipesInput {
            fridge_contents: payload.fridge_contents,
            threshold: payload.threshold,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MatchRecipesResponse {
        ingredients: matches.ingredients,
        matched_recipes: matches.recipes.into_iter().map(MatchedRecipe::from).collect(),
        threshold: matches.threshold,
    }))
}
