use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, header::ACCEPT},
    response::{Html, IntoResponse, Response as HttpResponse},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use snapchef_core::domain::fridge_analysis::{
    entities::FridgeAnalysis,
    ports::FridgeAnalysisService,
    value_objects::{AnalyzeFridgeInput, ImageInput},
};
use utoipa::ToSchema;

use crate::application::http::{
    fridge_analysis::{validators::AnalyzeFridgeForm, views::render_analysis_page},
    recipe::handlers::match_recipes::MatchedRecipe,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFridgeResponse {
    pub fridge_contents: String,
    pub ingredients: Vec<String>,
    pub matched_recipes: Vec<MatchedRecipe>,
    pub ai_suggestions: String,
    pub threshold: f64,
}

impl From<FridgeAnalysis> for AnalyzeFridgeResponse {
    fn from(analysis: FridgeAnalysis) -> Self {
        Self {
            fridge_contents: analysis.fridge_contents,
            ingredients: analysis.ingredients,
            matched_recipes: analysis
                .matched_recipes
                .into_iter()
                .map(MatchedRecipe::from)
                .collect(),
            ai_suggestions: analysis.ai_suggestions,
            threshold: analysis.threshold,
        }
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

#[utoipa::path(
    post,
    path = "/analyze-fridge",
    tag = "fridge-analysis",
    summary = "Analyze a fridge photo",
    description = "Lists the visible food with the vision model, matches it against the recipe corpus and asks the model for recipe ideas. Returns HTML when the Accept header asks for text/html.",
    request_body(content = AnalyzeFridgeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFridgeResponse),
        (status = 400, description = "Missing or oversized image")
    ),
)]
pub async fn analyze_fridge(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut image: Option<(Bytes, Option<String>)> = None;
    let mut threshold: Option<f64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().map(|m| m.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data, mime_type));
            }
            "threshold" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read threshold: {}", e))
                })?;
                threshold = Some(value.trim().parse().map_err(|_| {
                    ApiError::BadRequest("Invalid threshold format".to_string())
                })?);
            }
            _ => {}
        }
    }

    let (data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    if data.is_empty() {
        return Err(ApiError::BadRequest("Uploaded image is empty".to_string()));
    }

    let analysis = state
        .service
        .analyze_fridge(AnalyzeFridgeInput {
            image: ImageInput::new(data, mime_type),
            threshold,
        })
        .await
        .map_err(ApiError::from)?;

    if wants_html(&headers) {
        return Ok(Html(render_analysis_page(&analysis)).into_response());
    }

    Ok(Response::OK(AnalyzeFridgeResponse::from(analysis)).into_response())
}
