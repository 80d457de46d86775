use sqlx::PgPool;
use storage::{
    dto::pick::{AdminPickView, PickQuery},
    error::Result,
    repository::pick::PickRepository,
};

/// Every pick matching the filter, oldest first
pub async fn list_picks(pool: &PgPool, query: PickQuery) -> Result<Vec<AdminPickView>> {
    let picks = PickRepository::new(pool).list_views(query).await?;

    tracing::debug!(?query, count = picks.len(), "Admin picks listed");

    Ok(picks)
}
