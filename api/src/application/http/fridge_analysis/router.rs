use super::handlers::{
    analyze_fridge::{__path_analyze_fridge, MAX_IMAGE_SIZE, analyze_fridge},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

// Room for the multipart framing and the threshold field around the image.
const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_fridge, suggest_recipes))]
pub struct FridgeAnalysisApiDoc;

pub fn fridge_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze-fridge", state.args.server.root_path),
            post(analyze_fridge).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
        .route(
            &format!("{}/api/recipes/suggest", state.args.server.root_path),
            post(suggest_recipes),
        )
}
