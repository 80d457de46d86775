use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{GameStatus, Team, Week};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekResponse {
    pub id: i64,
    pub season: i32,
    pub week_number: i32,
    pub is_finalized: bool,
}

impl From<Week> for WeekResponse {
    fn from(week: Week) -> Self {
        Self {
            id: week.id,
            season: week.season,
            week_number: week.week_number,
            is_finalized: week.is_finalized,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekInfo {
    pub id: i64,
    pub season: i32,
    pub week_number: i32,
}

impl From<&Week> for WeekInfo {
    fn from(week: &Week) -> Self {
        Self {
            id: week.id,
            season: week.season,
            week_number: week.week_number,
        }
    }
}

/// One game of a week's schedule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduledGame {
    pub game_id: i64,
    pub kickoff_at: DateTime<Utc>,
    pub status: GameStatus,
    pub final_home_score: Option<i32>,
    pub final_away_score: Option<i32>,
    pub home_team: Team,
    pub away_team: Team,
    pub week: WeekInfo,
}
