use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::{
    html::{escape_html, page},
    server::app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(get_hello))]
pub struct HomeApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HelloResponse {
    pub message: String,
}

pub fn home_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/", root_path), get(get_home))
        .route(&format!("{}/api/hello", root_path), get(get_hello))
}

/// Upload form for browsers; posts straight to the analyze endpoint.
pub async fn get_home(State(state): State<AppState>) -> Html<String> {
    let body = format!(
        r#"<h1>Snap Chef</h1>
<form action="{root}/api/analyze-fridge" method="POST" enctype="multipart/form-data">
    <input type="file" name="image" accept="image/*" required>
    <button type="submit">Analyze Fridge</button>
</form>
<div class="container" id="results"></div>"#,
        root = escape_html(&state.args.server.root_path),
    );

    Html(page("Snap Chef", &body))
}

#[utoipa::path(
    get,
    path = "/hello",
    tag = "home",
    summary = "Connectivity probe",
    responses(
        (status = 200, body = HelloResponse)
    ),
)]
pub async fn get_hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Snap Chef!".to_string(),
    })
}
