use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct MatchRecipesRequest {
    /// Comma-separated food list, e.g. "milk, 2 eggs, flour"
    /// An empty list is accepted and matches nothing.
    #[validate(length(max = 5000, message = "fridge_contents must be at most 5000 characters"))]
    pub fridge_contents: String,
    #[validate(range(min = 0.0, max = 1.0, message = "threshold must be between 0 and 1"))]
    #[schema(example = 0.8)]
    pub threshold: Option<f64>,
}
