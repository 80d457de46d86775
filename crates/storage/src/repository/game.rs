use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::dto::game::{FinalScore, GameDetail};
use crate::dto::week::{ScheduledGame, WeekInfo};
use crate::error::Result;
use crate::models::{FinalizedGame, GameStatus, Team, Week};

#[derive(FromRow)]
struct ScheduleRow {
    game_id: i64,
    kickoff_at: DateTime<Utc>,
    status: GameStatus,
    final_home_score: Option<i32>,
    final_away_score: Option<i32>,
    home_id: i64,
    home_code: String,
    home_name: String,
    away_id: i64,
    away_code: String,
    away_name: String,
}

#[derive(FromRow)]
struct GameDetailRow {
    id: i64,
    season: i32,
    week_number: i32,
    kickoff_at: DateTime<Utc>,
    status: GameStatus,
    final_home_score: Option<i32>,
    final_away_score: Option<i32>,
    home_id: i64,
    home_code: String,
    home_name: String,
    away_id: i64,
    away_code: String,
    away_name: String,
}

pub struct GameRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GameRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Score columns of every FINAL game in a week
    pub async fn list_finalized_for_week(&self, week_id: i64) -> Result<Vec<FinalizedGame>> {
        let games = sqlx::query_as::<_, FinalizedGame>(
            r#"
            SELECT id, final_home_score, final_away_score
            FROM games
            WHERE week_id = $1 AND status = 'FINAL'
            ORDER BY id
            "#,
        )
        .bind(week_id)
        .fetch_all(self.pool)
        .await?;

        Ok(games)
    }

    /// Games of a week with both teams, ordered by kickoff
    pub async fn list_schedule_for_week(&self, week: &Week) -> Result<Vec<ScheduledGame>> {
        let rows = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT
                g.id as game_id,
                g.kickoff_at,
                g.status,
                g.final_home_score,
                g.final_away_score,
                h.id as home_id,
                h.code as home_code,
                h.name as home_name,
                a.id as away_id,
                a.code as away_code,
                a.name as away_name
            FROM games g
            INNER JOIN teams h ON g.home_team_id = h.id
            INNER JOIN teams a ON g.away_team_id = a.id
            WHERE g.week_id = $1
            ORDER BY g.kickoff_at ASC, g.id ASC
            "#,
        )
        .bind(week.id)
        .fetch_all(self.pool)
        .await?;

        let games = rows
            .into_iter()
            .map(|row| ScheduledGame {
                game_id: row.game_id,
                kickoff_at: row.kickoff_at,
                status: row.status,
                final_home_score: row.final_home_score,
                final_away_score: row.final_away_score,
                home_team: Team {
                    id: row.home_id,
                    code: row.home_code,
                    name: row.home_name,
                },
                away_team: Team {
                    id: row.away_id,
                    code: row.away_code,
                    name: row.away_name,
                },
                week: WeekInfo::from(week),
            })
            .collect();

        Ok(games)
    }

    /// A single game with its week and both teams
    pub async fn find_detail(&self, game_id: i64) -> Result<Option<GameDetail>> {
        let row = sqlx::query_as::<_, GameDetailRow>(
            r#"
            SELECT
                g.id,
                w.season,
                w.week_number,
                g.kickoff_at,
                g.status,
                g.final_home_score,
                g.final_away_score,
                h.id as home_id,
                h.code as home_code,
                h.name as home_name,
                a.id as away_id,
                a.code as away_code,
                a.name as away_name
            FROM games g
            INNER JOIN weeks w ON g.week_id = w.id
            INNER JOIN teams h ON g.home_team_id = h.id
            INNER JOIN teams a ON g.away_team_id = a.id
            WHERE g.id = $1
            "#,
        )
        .bind(game_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| GameDetail {
            id: row.id,
            season: row.season,
            week_number: row.week_number,
            kickoff_at: row.kickoff_at,
            status: row.status,
            final_score: FinalScore {
                home: row.final_home_score,
                away: row.final_away_score,
            },
            home_team: Team {
                id: row.home_id,
                code: row.home_code,
                name: row.home_name,
            },
            away_team: Team {
                id: row.away_id,
                code: row.away_code,
                name: row.away_name,
            },
        }))
    }
}
