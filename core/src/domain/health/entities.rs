use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CorpusHealthStatus {
    pub status: String,
    pub recipe_count: usize,
    pub checked_at: DateTime<Utc>,
}
