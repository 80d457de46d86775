use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "game_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Scheduled,
    Final,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Game {
    pub id: i64,
    pub week_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub kickoff_at: DateTime<Utc>,
    pub status: GameStatus,
    pub final_home_score: Option<i32>,
    pub final_away_score: Option<i32>,
}

/// Actual result of a finalized game.
///
/// `Tie` is its own variant so it can never compare equal to a pick's winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameOutcome {
    Home,
    Away,
    Tie,
}

impl GameOutcome {
    pub fn from_scores(home: i32, away: i32) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Self::Home,
            std::cmp::Ordering::Less => Self::Away,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

/// Score columns of a game with status FINAL
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FinalizedGame {
    pub id: i64,
    pub final_home_score: Option<i32>,
    pub final_away_score: Option<i32>,
}

impl FinalizedGame {
    /// `None` while either score is still missing.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match (self.final_home_score, self.final_away_score) {
            (Some(home), Some(away)) => Some(GameOutcome::from_scores(home, away)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: Option<i32>, away: Option<i32>) -> FinalizedGame {
        FinalizedGame {
            id: 1,
            final_home_score: home,
            final_away_score: away,
        }
    }

    #[test]
    fn higher_score_wins() {
        assert_eq!(game(Some(24), Some(17)).outcome(), Some(GameOutcome::Home));
        assert_eq!(game(Some(3), Some(31)).outcome(), Some(GameOutcome::Away));
    }

    #[test]
    fn equal_scores_are_a_tie() {
        assert_eq!(game(Some(14), Some(14)).outcome(), Some(GameOutcome::Tie));
        assert_eq!(game(Some(0), Some(0)).outcome(), Some(GameOutcome::Tie));
    }

    #[test]
    fn missing_score_is_unresolved() {
        assert_eq!(game(None, Some(10)).outcome(), None);
        assert_eq!(game(Some(10), None).outcome(), None);
        assert_eq!(game(None, None).outcome(), None);
    }
}
