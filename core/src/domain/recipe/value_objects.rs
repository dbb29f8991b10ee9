use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;

/// Minimum overlap ratio a recipe needs to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct MatchThreshold(f64);

impl MatchThreshold {
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CoreError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self(DEFAULT_MATCH_THRESHOLD)
    }
}

impl TryFrom<f64> for MatchThreshold {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchThreshold> for f64 {
    fn from(threshold: MatchThreshold) -> Self {
        threshold.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverlapScore {
    pub is_match: bool,
    pub ratio: f64,
    pub common: BTreeSet<String>,
}

impl OverlapScore {
    pub fn empty() -> Self {
        Self {
            is_match: false,
            ratio: 0.0,
            common: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecipesInput {
    pub fridge_contents: String,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMatches {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub threshold: f64,
}
