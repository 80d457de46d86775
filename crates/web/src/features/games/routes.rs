use axum::{Router, routing::get};

use super::handlers::get_game;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:game_id", get(get_game))
}
