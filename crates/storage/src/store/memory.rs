use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::StandingsStore;
use crate::error::{Result, StorageError};
use crate::models::{
    FinalizedGame, Game, GameStatus, Pick, PickWinner, UserDisplayName, UserScoreTotal,
};

#[derive(Default)]
struct State {
    users: BTreeMap<i64, Option<String>>,
    weeks: BTreeMap<i64, bool>,
    games: BTreeMap<i64, Game>,
    picks: BTreeMap<i64, Pick>,
    standings: BTreeMap<(i64, i64), i32>,
    failing_pick_writes: HashSet<i64>,
    failing_standing_writes: HashSet<i64>,
    fail_week_finalize: bool,
    display_name_lookups: usize,
}

/// Store kept entirely in process memory.
///
/// Individual writes can be made to fail, which lets callers observe how
/// the engine reports partial persistence failures.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

fn simulated_failure() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&mut self) -> &mut State {
        self.state.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_user(mut self, user_id: i64, display_name: Option<&str>) -> Self {
        self.state_mut()
            .users
            .insert(user_id, display_name.map(str::to_owned));
        self
    }

    pub fn with_week(mut self, week_id: i64) -> Self {
        self.state_mut().weeks.insert(week_id, false);
        self
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.state_mut().games.insert(game.id, game);
        self
    }

    pub fn with_final_game(self, game_id: i64, week_id: i64, home: i32, away: i32) -> Self {
        self.with_game(Game {
            id: game_id,
            week_id,
            home_team_id: 1,
            away_team_id: 2,
            kickoff_at: Utc::now(),
            status: GameStatus::Final,
            final_home_score: Some(home),
            final_away_score: Some(away),
        })
    }

    pub fn with_scheduled_game(self, game_id: i64, week_id: i64) -> Self {
        self.with_game(Game {
            id: game_id,
            week_id,
            home_team_id: 1,
            away_team_id: 2,
            kickoff_at: Utc::now(),
            status: GameStatus::Scheduled,
            final_home_score: None,
            final_away_score: None,
        })
    }

    /// Replaces any earlier pick by the same user on the same game.
    pub fn with_pick(mut self, pick_id: i64, user_id: i64, game_id: i64, winner: PickWinner) -> Self {
        let now = Utc::now();
        let state = self.state_mut();
        state
            .picks
            .retain(|_, p| !(p.user_id == user_id && p.game_id == game_id));
        state.picks.insert(
            pick_id,
            Pick {
                id: pick_id,
                user_id,
                game_id,
                winner,
                margin: 0,
                score: None,
                submitted_at: now,
                updated_at: now,
            },
        );
        self
    }

    pub fn with_standing(mut self, user_id: i64, week_id: i64, score: i32) -> Self {
        self.state_mut().standings.insert((user_id, week_id), score);
        self
    }

    pub fn fail_pick_write(mut self, pick_id: i64) -> Self {
        self.state_mut().failing_pick_writes.insert(pick_id);
        self
    }

    pub fn fail_standing_write(mut self, user_id: i64) -> Self {
        self.state_mut().failing_standing_writes.insert(user_id);
        self
    }

    pub fn fail_week_finalize(mut self) -> Self {
        self.state_mut().fail_week_finalize = true;
        self
    }

    pub fn pick_score(&self, pick_id: i64) -> Option<i32> {
        self.state().picks.get(&pick_id).and_then(|p| p.score)
    }

    pub fn standing(&self, user_id: i64, week_id: i64) -> Option<i32> {
        self.state().standings.get(&(user_id, week_id)).copied()
    }

    pub fn standings_count(&self) -> usize {
        self.state().standings.len()
    }

    pub fn is_week_finalized(&self, week_id: i64) -> bool {
        self.state().weeks.get(&week_id).copied().unwrap_or(false)
    }

    /// Number of `display_names` calls served so far.
    pub fn display_name_lookups(&self) -> usize {
        self.state().display_name_lookups
    }
}

#[async_trait]
impl StandingsStore for InMemoryStore {
    async fn finalized_games(&self, week_id: i64) -> Result<Vec<FinalizedGame>> {
        let games = self
            .state()
            .games
            .values()
            .filter(|g| g.week_id == week_id && g.status == GameStatus::Final)
            .map(|g| FinalizedGame {
                id: g.id,
                final_home_score: g.final_home_score,
                final_away_score: g.final_away_score,
            })
            .collect();

        Ok(games)
    }

    async fn picks_for_games(&self, game_ids: &[i64]) -> Result<Vec<Pick>> {
        let picks = self
            .state()
            .picks
            .values()
            .filter(|p| game_ids.contains(&p.game_id))
            .cloned()
            .collect();

        Ok(picks)
    }

    async fn set_pick_score(&self, pick_id: i64, score: i32) -> Result<()> {
        let mut state = self.state();
        if state.failing_pick_writes.contains(&pick_id) {
            return Err(simulated_failure());
        }

        let pick = state.picks.get_mut(&pick_id).ok_or(StorageError::NotFound)?;
        pick.score = Some(score);
        Ok(())
    }

    async fn upsert_standing(&self, user_id: i64, week_id: i64, score: i32) -> Result<()> {
        let mut state = self.state();
        if state.failing_standing_writes.contains(&user_id) {
            return Err(simulated_failure());
        }

        state.standings.insert((user_id, week_id), score);
        Ok(())
    }

    async fn finalize_week(&self, week_id: i64) -> Result<()> {
        let mut state = self.state();
        if state.fail_week_finalize {
            return Err(simulated_failure());
        }

        let finalized = state.weeks.get_mut(&week_id).ok_or(StorageError::NotFound)?;
        *finalized = true;
        Ok(())
    }

    async fn display_names(&self, user_ids: &[i64]) -> Result<Vec<UserDisplayName>> {
        let mut state = self.state();
        state.display_name_lookups += 1;

        let users = user_ids
            .iter()
            .filter_map(|id| {
                state.users.get(id).map(|name| UserDisplayName {
                    id: *id,
                    display_name: name.clone(),
                })
            })
            .collect();

        Ok(users)
    }

    async fn score_totals(&self) -> Result<Vec<UserScoreTotal>> {
        let mut totals: BTreeMap<i64, i64> = BTreeMap::new();
        for ((user_id, _), score) in &self.state().standings {
            *totals.entry(*user_id).or_default() += i64::from(*score);
        }

        Ok(totals
            .into_iter()
            .map(|(user_id, total)| UserScoreTotal {
                user_id,
                total_score: Some(total),
            })
            .collect())
    }
}
