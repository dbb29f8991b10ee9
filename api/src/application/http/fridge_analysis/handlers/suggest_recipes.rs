use axum::extract::State;
use serde::{Deserialize, Serialize};
use snapchef_core::domain::fridge_analysis::{
    ports::FridgeAnalysisService, value_objects::SuggestRecipesInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    fridge_analysis::validators::SuggestRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestRecipesResponse {
    pub ai_suggestions: String,
}

#[utoipa::path(
    post,
    path = "/recipes/suggest",
    tag = "fridge-analysis",
    summary = "Suggest recipes with AI",
    description = "Asks the generative model for recipes using the given food list",
    responses(
        (status = 200, body = SuggestRecipesResponse)
    ),
    request_body = SuggestRecipesRequest
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestRecipesRequest>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    let ai_suggestions = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            fridge_contents: payload.fridge_contents,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestRecipesResponse { ai_suggestions }))
}
