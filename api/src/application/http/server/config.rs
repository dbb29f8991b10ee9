use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    fridge_analysis::handlers::analyze_fridge::MAX_IMAGE_SIZE, server::app_state::AppState,
};

/// Public, non-secret settings a client may want before uploading.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub default_threshold: f64,
    pub gemini_model: String,
    pub max_image_bytes: usize,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        default_threshold: state.service.default_threshold().value(),
        gemini_model: state.args.llm.gemini_model.clone(),
        max_image_bytes: MAX_IMAGE_SIZE,
    })
}
