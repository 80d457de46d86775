use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{common::parse_positive_id_str, game::GameDetail},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    params(
        ("game_id" = i64, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game with its week, teams and final score", body = GameDetail),
        (status = 400, description = "Invalid game id"),
        (status = 404, description = "Game not found")
    ),
    tag = "games"
)]
pub async fn get_game(
    State(db): State<Database>,
    Path(game_id): Path<String>,
) -> Result<Response, WebError> {
    let game_id = parse_positive_id_str(&game_id)
        .ok_or_else(|| WebError::BadRequest("Invalid game id".to_string()))?;

    let game = services::get_game(db.pool(), game_id)
        .await?
        .ok_or_else(|| WebError::NotFound("Game not found".to_string()))?;

    Ok(Json(game).into_response())
}
