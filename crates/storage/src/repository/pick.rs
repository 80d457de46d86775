use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::dto::pick::{AdminPickView, PickDetail, PickGame, PickQuery, PickUser};
use crate::error::{Result, StorageError};
use crate::models::{GameStatus, Pick, PickWinner, Team};

#[derive(FromRow)]
struct PickViewRow {
    id: i64,
    winner: PickWinner,
    margin: i32,
    score: Option<i32>,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: i64,
    display_name: Option<String>,
    email: String,
    game_id: i64,
    season: i32,
    week_number: i32,
    kickoff_at: DateTime<Utc>,
    status: GameStatus,
    home_id: i64,
    home_code: String,
    home_name: String,
    away_id: i64,
    away_code: String,
    away_name: String,
}

impl From<PickViewRow> for AdminPickView {
    fn from(row: PickViewRow) -> Self {
        let home = Team {
            id: row.home_id,
            code: row.home_code,
            name: row.home_name,
        };
        let away = Team {
            id: row.away_id,
            code: row.away_code,
            name: row.away_name,
        };
        let selected_team = match row.winner {
            PickWinner::Home => home.code.clone(),
            PickWinner::Away => away.code.clone(),
        };

        Self {
            id: row.id,
            user: PickUser {
                id: row.user_id,
                name: row.display_name,
                email: row.email,
            },
            game: PickGame {
                id: row.game_id,
                season: row.season,
                week: row.week_number,
                home,
                away,
                kickoff_at: row.kickoff_at,
                status: row.status,
            },
            pick: PickDetail {
                winner_side: row.winner,
                selected_team,
                margin: row.margin,
                score: row.score,
                submitted_at: row.submitted_at,
                updated_at: row.updated_at,
            },
        }
    }
}

pub struct PickRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PickRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All picks placed on any of the given games
    pub async fn list_for_games(&self, game_ids: &[i64]) -> Result<Vec<Pick>> {
        let picks = sqlx::query_as::<_, Pick>(
            r#"
            SELECT id, user_id, game_id, winner, margin, score, submitted_at, updated_at
            FROM picks
            WHERE game_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(game_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(picks)
    }

    /// Store the points a pick earned. Leaves `updated_at` alone since that
    /// tracks the owner's edits.
    pub async fn update_score(&self, pick_id: i64, score: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE picks
            SET score = $1
            WHERE id = $2
            "#,
        )
        .bind(score)
        .bind(pick_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Picks with their owner, game, week and teams. Each filter left as
    /// `None` is not applied.
    pub async fn list_views(&self, query: PickQuery) -> Result<Vec<AdminPickView>> {
        let rows = sqlx::query_as::<_, PickViewRow>(
            r#"
            SELECT
                p.id,
                p.winner,
                p.margin,
                p.score,
                p.submitted_at,
                p.updated_at,
                u.id as user_id,
                u.display_name,
                u.email,
                g.id as game_id,
                w.season,
                w.week_number,
                g.kickoff_at,
                g.status,
                h.id as home_id,
                h.code as home_code,
                h.name as home_name,
                a.id as away_id,
                a.code as away_code,
                a.name as away_name
            FROM picks p
            INNER JOIN users u ON p.user_id = u.id
            INNER JOIN games g ON p.game_id = g.id
            INNER JOIN weeks w ON g.week_id = w.id
            INNER JOIN teams h ON g.home_team_id = h.id
            INNER JOIN teams a ON g.away_team_id = a.id
            WHERE ($1::BIGINT IS NULL OR p.user_id = $1)
              AND ($2::INT IS NULL OR w.season = $2)
              AND ($3::INT IS NULL OR w.week_number = $3)
            ORDER BY p.id ASC
            "#,
        )
        .bind(query.user_id)
        .bind(query.season)
        .bind(query.week)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminPickView::from).collect())
    }
}
