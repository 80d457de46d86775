use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Week {
    pub id: i64,
    pub season: i32,
    pub week_number: i32,
    pub is_finalized: bool,
    pub created_at: DateTime<Utc>,
}
