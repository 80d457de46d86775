use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Persisted score of one user for one week, unique per (user_id, week_id)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Standing {
    pub id: i64,
    pub user_id: i64,
    pub week_id: i64,
    pub score: i32,
    pub computed_at: DateTime<Utc>,
}

/// Sum of one user's standings across every week
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserScoreTotal {
    pub user_id: i64,
    pub total_score: Option<i64>,
}
