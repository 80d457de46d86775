use async_trait::async_trait;
use sqlx::PgPool;

use super::StandingsStore;
use crate::error::Result;
use crate::models::{FinalizedGame, Pick, UserDisplayName, UserScoreTotal};
use crate::repository::{
    game::GameRepository, pick::PickRepository, standings::StandingsRepository,
    user::UserRepository, week::WeekRepository,
};

pub struct PgStandingsStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgStandingsStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StandingsStore for PgStandingsStore<'_> {
    async fn finalized_games(&self, week_id: i64) -> Result<Vec<FinalizedGame>> {
        GameRepository::new(self.pool)
            .list_finalized_for_week(week_id)
            .await
    }

    async fn picks_for_games(&self, game_ids: &[i64]) -> Result<Vec<Pick>> {
        PickRepository::new(self.pool).list_for_games(game_ids).await
    }

    async fn set_pick_score(&self, pick_id: i64, score: i32) -> Result<()> {
        PickRepository::new(self.pool)
            .update_score(pick_id, score)
            .await
    }

    async fn upsert_standing(&self, user_id: i64, week_id: i64, score: i32) -> Result<()> {
        StandingsRepository::new(self.pool)
            .upsert(user_id, week_id, score)
            .await?;
        Ok(())
    }

    async fn finalize_week(&self, week_id: i64) -> Result<()> {
        WeekRepository::new(self.pool).mark_finalized(week_id).await
    }

    async fn display_names(&self, user_ids: &[i64]) -> Result<Vec<UserDisplayName>> {
        UserRepository::new(self.pool)
            .find_display_names(user_ids)
            .await
    }

    async fn score_totals(&self) -> Result<Vec<UserScoreTotal>> {
        StandingsRepository::new(self.pool).sum_by_user().await
    }
}
