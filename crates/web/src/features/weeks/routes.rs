use axum::{Router, routing::get};

use super::handlers::{get_current_week, get_week_schedule};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(get_current_week))
        .route("/:week_id/games", get(get_week_schedule))
}
