use std::time::Duration;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{games, picks, standings, weeks};
use crate::middleware::auth::ApiKeys;
use crate::openapi::ApiDoc;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub fn app(state: AppState, api_keys: ApiKeys) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/healthz", get(health))
        .nest("/api/standings", standings::routes::routes(api_keys.clone()))
        .nest("/api/weeks", weeks::routes::routes())
        .nest("/api/games", games::routes::routes())
        .nest("/api/admin", picks::routes::routes(api_keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
