use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::pick::{AdminPickView, PickFilter},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/picks",
    params(PickFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Picks with owner, game and awarded score", body = Vec<AdminPickView>),
        (status = 400, description = "Invalid user_id, season or week"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "picks"
)]
pub async fn list_picks(
    State(db): State<Database>,
    Query(filter): Query<PickFilter>,
) -> Result<Response, WebError> {
    let query = filter.validate().map_err(WebError::BadRequest)?;

    let picks = services::list_picks(db.pool(), query).await?;

    Ok(Json(picks).into_response())
}
