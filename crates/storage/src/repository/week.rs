use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Week;

pub struct WeekRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WeekRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, week_id: i64) -> Result<Week> {
        let week = sqlx::query_as::<_, Week>(
            r#"
            SELECT id, season, week_number, is_finalized, created_at
            FROM weeks
            WHERE id = $1
            "#,
        )
        .bind(week_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(week)
    }

    /// Earliest week of the latest season that has not been finalized yet
    pub async fn find_current(&self) -> Result<Week> {
        let week = sqlx::query_as::<_, Week>(
            r#"
            SELECT id, season, week_number, is_finalized, created_at
            FROM weeks
            WHERE is_finalized = false
            ORDER BY season DESC, week_number ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(week)
    }

    pub async fn mark_finalized(&self, week_id: i64) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE weeks
            SET is_finalized = true
            WHERE id = $1
            "#,
        )
        .bind(week_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
