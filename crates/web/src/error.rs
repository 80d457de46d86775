use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::{StandingsError, StorageError};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Standings(StandingsError),
    BadRequest(String),
    NotFound(String),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Standings(e) => write!(f, "Standings error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Standings(StandingsError::InvalidWeekId) => StatusCode::BAD_REQUEST,
            Self::Standings(StandingsError::NoFinalizedGames(_))
            | Self::Standings(StandingsError::NoPicksForWeek(_))
            | Self::Standings(StandingsError::NoStandingsData) => StatusCode::NOT_FOUND,
            Self::Standings(StandingsError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) | Self::Standings(StandingsError::Storage(e)) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Standings(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::BadRequest(msg) | Self::NotFound(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl WebError {
    /// Map a missing row to a 404 naming the resource; other storage errors
    /// pass through unchanged.
    pub fn not_found_as(message: &'static str) -> impl Fn(StorageError) -> WebError {
        move |error| match error {
            StorageError::NotFound => Self::NotFound(message.to_string()),
            other => Self::Storage(other),
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<StandingsError> for WebError {
    fn from(error: StandingsError) -> Self {
        match error {
            StandingsError::Storage(e) => Self::Storage(e),
            other => Self::Standings(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(error: impl Into<WebError>) -> StatusCode {
        error.into().into_response().status()
    }

    #[test]
    fn standings_preconditions_map_to_client_errors() {
        assert_eq!(status(StandingsError::InvalidWeekId), StatusCode::BAD_REQUEST);
        assert_eq!(status(StandingsError::NoFinalizedGames(3)), StatusCode::NOT_FOUND);
        assert_eq!(status(StandingsError::NoPicksForWeek(3)), StatusCode::NOT_FOUND);
        assert_eq!(status(StandingsError::NoStandingsData), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_map_to_server_errors() {
        assert_eq!(
            status(StandingsError::Storage(StorageError::Database(
                sqlx::Error::PoolTimedOut
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status(StorageError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status(StorageError::ConstraintViolation("duplicate".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(status(WebError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status(WebError::NotFound("Game not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn missing_rows_can_name_the_resource() {
        let map = WebError::not_found_as("Week not found");

        let response = map(StorageError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(matches!(
            map(StorageError::ConstraintViolation("x".into())),
            WebError::Storage(StorageError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn wrapped_storage_errors_are_unwrapped() {
        let error = WebError::from(StandingsError::Storage(StorageError::NotFound));
        assert!(matches!(error, WebError::Storage(StorageError::NotFound)));
    }
}
