use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Standing, UserScoreTotal};

pub struct StandingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite the score for (user_id, week_id)
    pub async fn upsert(&self, user_id: i64, week_id: i64, score: i32) -> Result<Standing> {
        let standing = sqlx::query_as::<_, Standing>(
            r#"
            INSERT INTO standings (user_id, week_id, score)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, week_id)
            DO UPDATE SET
                score = EXCLUDED.score,
                computed_at = CURRENT_TIMESTAMP
            RETURNING id, user_id, week_id, score, computed_at
            "#,
        )
        .bind(user_id)
        .bind(week_id)
        .bind(score)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_foreign_key_violation() {
                StorageError::ConstraintViolation(format!(
                    "Unknown user {user_id} or week {week_id}"
                ))
            } else {
                e
            }
        })?;

        Ok(standing)
    }

    pub async fn list_for_week(&self, week_id: i64) -> Result<Vec<Standing>> {
        let standings = sqlx::query_as::<_, Standing>(
            r#"
            SELECT id, user_id, week_id, score, computed_at
            FROM standings
            WHERE week_id = $1
            ORDER BY score DESC, user_id ASC
            "#,
        )
        .bind(week_id)
        .fetch_all(self.pool)
        .await?;

        Ok(standings)
    }

    /// Per-user score sums across every week
    pub async fn sum_by_user(&self) -> Result<Vec<UserScoreTotal>> {
        let totals = sqlx::query_as::<_, UserScoreTotal>(
            r#"
            SELECT user_id, SUM(score)::BIGINT as total_score
            FROM standings
            GROUP BY user_id
            ORDER BY total_score DESC, user_id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(totals)
    }
}
