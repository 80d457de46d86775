use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::parse_positive_id_str,
        week::{ScheduledGame, WeekResponse},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/weeks/current",
    responses(
        (status = 200, description = "Current week", body = WeekResponse),
        (status = 404, description = "No current week found")
    ),
    tag = "weeks"
)]
pub async fn get_current_week(State(db): State<Database>) -> Result<Response, WebError> {
    let week = services::get_current_week(db.pool())
        .await
        .map_err(WebError::not_found_as("No current week found"))?;

    Ok(Json(week).into_response())
}

#[utoipa::path(
    get,
    path = "/api/weeks/{week_id}/games",
    params(
        ("week_id" = i64, Path, description = "Week ID")
    ),
    responses(
        (status = 200, description = "Games of the week ordered by kickoff", body = Vec<ScheduledGame>),
        (status = 400, description = "Invalid week id"),
        (status = 404, description = "Week not found")
    ),
    tag = "weeks"
)]
pub async fn get_week_schedule(
    State(db): State<Database>,
    Path(week_id): Path<String>,
) -> Result<Response, WebError> {
    let week_id = parse_positive_id_str(&week_id)
        .ok_or_else(|| WebError::BadRequest("Invalid week id".to_string()))?;

    let games = services::get_week_schedule(db.pool(), week_id)
        .await
        .map_err(WebError::not_found_as("Week not found"))?;

    Ok(Json(games).into_response())
}
