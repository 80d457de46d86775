use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::GameOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "pick_winner", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PickWinner {
    Home,
    Away,
}

impl PickWinner {
    /// A tie never matches either side.
    pub fn matches(self, outcome: GameOutcome) -> bool {
        matches!(
            (self, outcome),
            (Self::Home, GameOutcome::Home) | (Self::Away, GameOutcome::Away)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pick {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub winner: PickWinner,
    pub margin: i32,
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
