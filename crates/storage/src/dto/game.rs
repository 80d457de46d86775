use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{GameStatus, Team};

/// Both scores stay null until the game is FINAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FinalScore {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameDetail {
    pub id: i64,
    pub season: i32,
    pub week_number: i32,
    pub kickoff_at: DateTime<Utc>,
    pub status: GameStatus,
    pub final_score: FinalScore,
    pub home_team: Team,
    pub away_team: Team,
}
