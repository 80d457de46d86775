use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        common::parse_positive_id_str,
        standings::{CalculateWeeklyRequest, OverallStandingEntry, WeeklyStandingsResponse},
    },
    error::StandingsError,
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/standings/calculate/weekly",
    request_body = CalculateWeeklyRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Weekly standings calculated and stored", body = WeeklyStandingsResponse),
        (status = 400, description = "Invalid or missing week_id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No finalized games or no picks for the week")
    ),
    tag = "standings"
)]
pub async fn calculate_weekly(
    State(state): State<AppState>,
    payload: Option<Json<CalculateWeeklyRequest>>,
) -> Result<Response, WebError> {
    let request = payload.map(|Json(req)| req).unwrap_or_default();
    let week_id = request.week_id()?;

    let standings =
        services::calculate_weekly_standings(state.db.pool(), week_id, state.scoring).await?;

    Ok((StatusCode::CREATED, Json(standings)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/standings/calculate/overall",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Season standings aggregated over every week", body = Vec<OverallStandingEntry>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No standings data available")
    ),
    tag = "standings"
)]
pub async fn calculate_overall(State(state): State<AppState>) -> Result<Response, WebError> {
    let standings = services::calculate_overall_standings(state.db.pool()).await?;

    Ok((StatusCode::CREATED, Json(standings)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/standings/weeks/{week_id}",
    params(
        ("week_id" = i64, Path, description = "Week ID")
    ),
    responses(
        (status = 200, description = "Stored standings for the week", body = WeeklyStandingsResponse),
        (status = 400, description = "Invalid week id"),
        (status = 404, description = "Week not found")
    ),
    tag = "standings"
)]
pub async fn get_week_standings(
    State(state): State<AppState>,
    Path(week_id): Path<String>,
) -> Result<Response, WebError> {
    let week_id = parse_positive_id_str(&week_id).ok_or(StandingsError::InvalidWeekId)?;

    let standings = services::get_week_standings(state.db.pool(), week_id)
        .await
        .map_err(WebError::not_found_as("Week not found"))?;

    Ok(Json(standings).into_response())
}
