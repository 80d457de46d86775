//! Data access consumed by the standings engine.
//!
//! The engine only talks to a [`StandingsStore`], so it can run against
//! Postgres ([`PgStandingsStore`]) or entirely in memory ([`InMemoryStore`]).

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStandingsStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FinalizedGame, Pick, UserDisplayName, UserScoreTotal};

#[async_trait]
pub trait StandingsStore: Send + Sync {
    /// Games of the week whose status is FINAL.
    async fn finalized_games(&self, week_id: i64) -> Result<Vec<FinalizedGame>>;

    async fn picks_for_games(&self, game_ids: &[i64]) -> Result<Vec<Pick>>;

    async fn set_pick_score(&self, pick_id: i64, score: i32) -> Result<()>;

    /// Create or overwrite the row keyed by (user_id, week_id).
    async fn upsert_standing(&self, user_id: i64, week_id: i64, score: i32) -> Result<()>;

    async fn finalize_week(&self, week_id: i64) -> Result<()>;

    /// One round trip for the whole batch. Unknown ids are simply absent.
    async fn display_names(&self, user_ids: &[i64]) -> Result<Vec<UserDisplayName>>;

    async fn score_totals(&self) -> Result<Vec<UserScoreTotal>>;
}
