use sqlx::PgPool;

use crate::error::Result;
use crate::models::UserDisplayName;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Display names for a batch of users in a single round trip
    pub async fn find_display_names(&self, user_ids: &[i64]) -> Result<Vec<UserDisplayName>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = sqlx::query_as::<_, UserDisplayName>(
            r#"
            SELECT id, display_name
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
