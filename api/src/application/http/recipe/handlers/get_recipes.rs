use axum::extract::State;
use serde::{Deserialize, Serialize};
use snapchef_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Returns the whole recipe corpus in stored order.",
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state.service.get_recipes().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
