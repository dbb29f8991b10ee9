use crate::application::http::{
    fridge_analysis::router::FridgeAnalysisApiDoc, health::HealthApiDoc, home::HomeApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snap Chef API"
    ),
    nest(
        (path = "/api", api = HomeApiDoc),
        (path = "/api", api = FridgeAnalysisApiDoc),
        (path = "/api/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
