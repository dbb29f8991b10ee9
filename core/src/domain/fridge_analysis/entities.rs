use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    fridge_analysis::prompts::{UNRECOGNIZED_FRIDGE_CONTENTS, UNRECOGNIZED_SUGGESTIONS},
    recipe::{entities::Recipe, value_objects::MatchThreshold},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FridgeAnalysis {
    /// Inventory text exactly as the vision model returned it.
    pub fridge_contents: String,
    pub ingredients: Vec<String>,
    pub matched_recipes: Vec<Recipe>,
    pub ai_suggestions: String,
    /// False when the model declined to describe the image.
    pub recognized: bool,
    /// Threshold the recipes were matched with.
    pub threshold: f64,
}

impl FridgeAnalysis {
    pub fn new(
        fridge_contents: String,
        ingredients: Vec<String>,
        matched_recipes: Vec<Recipe>,
        ai_suggestions: String,
        threshold: MatchThreshold,
    ) -> Self {
        Self {
            fridge_contents,
            ingredients,
            matched_recipes,
            ai_suggestions,
            recognized: true,
            threshold: threshold.value(),
        }
    }

    pub fn unrecognized(threshold: MatchThreshold) -> Self {
        Self {
            recognized: false,
            ..Self::new(
                UNRECOGNIZED_FRIDGE_CONTENTS.to_string(),
                Vec::new(),
                Vec::new(),
                UNRECOGNIZED_SUGGESTIONS.to_string(),
                threshold,
            )
        }
    }
}
