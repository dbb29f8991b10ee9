use super::handlers::{
    get_recipes::{__path_get_recipes, get_recipes},
    match_recipes::{__path_match_recipes, match_recipes},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipes, match_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!("{}/api/recipes/match", state.args.server.root_path),
            post(match_recipes),
        )
}
