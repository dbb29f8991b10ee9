use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestRecipesRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "fridge_contents must be between 1 and 5000 characters"
    ))]
    pub fridge_contents: String,
}

/// Multipart body of the analyze endpoint, for the OpenAPI document only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeFridgeForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    #[schema(example = 0.8)]
    pub threshold: Option<f64>,
}
