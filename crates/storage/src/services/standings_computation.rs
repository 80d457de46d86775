use std::collections::{BTreeMap, HashMap};

use futures::stream::{self, StreamExt};

use crate::dto::standings::{OverallStandingEntry, WeeklyStandingEntry, WeeklyStandingsResponse};
use crate::error::{StandingsError, StandingsResult, StorageError};
use crate::models::{GameOutcome, PickWinner, UserDisplayName};
use crate::services::report::{PersistenceReport, WriteTarget};
use crate::store::StandingsStore;

pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";
pub const DEFAULT_WRITE_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct ScoringOptions {
    /// Upper bound on pick-score and standings writes in flight at once
    pub write_concurrency: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            write_concurrency: DEFAULT_WRITE_CONCURRENCY,
        }
    }
}

impl ScoringOptions {
    fn concurrency(&self) -> usize {
        self.write_concurrency.max(1)
    }
}

/// Result of a weekly run along with what happened to its side effects
#[derive(Debug, Clone)]
pub struct WeeklyCalculation {
    pub standings: WeeklyStandingsResponse,
    pub report: PersistenceReport,
}

/// Map every resolvable FINAL game of the week to its outcome.
///
/// Games still missing a score are left out of the map.
pub async fn resolve_outcomes<S>(store: &S, week_id: i64) -> StandingsResult<HashMap<i64, GameOutcome>>
where
    S: StandingsStore + ?Sized,
{
    let games = store.finalized_games(week_id).await?;

    if games.is_empty() {
        return Err(StandingsError::NoFinalizedGames(week_id));
    }

    let outcomes: HashMap<i64, GameOutcome> = games
        .iter()
        .filter_map(|game| game.outcome().map(|outcome| (game.id, outcome)))
        .collect();

    let unresolved = games.len() - outcomes.len();
    if unresolved > 0 {
        tracing::warn!(week_id, unresolved, "Skipping FINAL games without both scores");
    }

    Ok(outcomes)
}

/// 1 point when the pick names the winning side, 0 otherwise. Ties score 0.
pub fn points_for(winner: PickWinner, outcome: Option<GameOutcome>) -> i32 {
    match outcome {
        Some(outcome) if winner.matches(outcome) => 1,
        _ => 0,
    }
}

/// Score every pick on the resolved games and return per-user totals.
///
/// Each pick's points are written back individually; failed writes go to
/// `report` and do not change the returned totals.
pub async fn score_picks<S>(
    store: &S,
    week_id: i64,
    outcomes: &HashMap<i64, GameOutcome>,
    options: ScoringOptions,
    report: &mut PersistenceReport,
) -> StandingsResult<BTreeMap<i64, i32>>
where
    S: StandingsStore + ?Sized,
{
    let mut game_ids: Vec<i64> = outcomes.keys().copied().collect();
    game_ids.sort_unstable();

    let picks = if game_ids.is_empty() {
        Vec::new()
    } else {
        store.picks_for_games(&game_ids).await?
    };

    if picks.is_empty() {
        return Err(StandingsError::NoPicksForWeek(week_id));
    }

    let mut totals: BTreeMap<i64, i32> = BTreeMap::new();
    let mut scored = Vec::with_capacity(picks.len());

    for pick in &picks {
        let points = points_for(pick.winner, outcomes.get(&pick.game_id).copied());
        *totals.entry(pick.user_id).or_insert(0) += points;
        scored.push((pick.id, points));
    }

    let results: Vec<(i64, Result<(), StorageError>)> = stream::iter(scored)
        .map(move |(pick_id, points)| async move {
            (pick_id, store.set_pick_score(pick_id, points).await)
        })
        .buffer_unordered(options.concurrency())
        .collect()
        .await;

    for (pick_id, result) in results {
        report.record(WriteTarget::PickScore { pick_id }, result);
    }

    tracing::debug!(week_id, picks = picks.len(), users = totals.len(), "Scored picks");

    Ok(totals)
}

/// Write one standings row per user, then mark the week finalized.
pub async fn upsert_standings<S>(
    store: &S,
    week_id: i64,
    totals: &BTreeMap<i64, i32>,
    options: ScoringOptions,
    report: &mut PersistenceReport,
) where
    S: StandingsStore + ?Sized,
{
    let rows: Vec<(i64, i32)> = totals.iter().map(|(&user_id, &score)| (user_id, score)).collect();

    let results: Vec<(i64, Result<(), StorageError>)> = stream::iter(rows)
        .map(move |(user_id, score)| async move {
            (user_id, store.upsert_standing(user_id, week_id, score).await)
        })
        .buffer_unordered(options.concurrency())
        .collect()
        .await;

    for (user_id, result) in results {
        report.record(WriteTarget::Standing { user_id, week_id }, result);
    }

    let finalized = store.finalize_week(week_id).await;
    report.record(WriteTarget::WeekFinalized { week_id }, finalized);
}

/// Display names keyed by user id. Blank names are left out so they fall
/// back to [`UNKNOWN_DISPLAY_NAME`].
pub fn name_map(users: Vec<UserDisplayName>) -> HashMap<i64, String> {
    users
        .into_iter()
        .filter_map(|user| {
            user.display_name
                .filter(|name| !name.is_empty())
                .map(|name| (user.id, name))
        })
        .collect()
}

fn display_name(names: &HashMap<i64, String>, user_id: i64) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_DISPLAY_NAME.to_string())
}

/// Highest score first; equal scores by ascending user id.
pub fn rank_weekly<I>(week_id: i64, totals: I, names: &HashMap<i64, String>) -> WeeklyStandingsResponse
where
    I: IntoIterator<Item = (i64, i32)>,
{
    let mut standings: Vec<WeeklyStandingEntry> = totals
        .into_iter()
        .map(|(user_id, score)| WeeklyStandingEntry {
            user_id,
            display_name: display_name(names, user_id),
            score,
        })
        .collect();

    standings.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));

    WeeklyStandingsResponse { week_id, standings }
}

pub async fn build_weekly_standings<S>(
    store: &S,
    week_id: i64,
    totals: &BTreeMap<i64, i32>,
) -> StandingsResult<WeeklyStandingsResponse>
where
    S: StandingsStore + ?Sized,
{
    let user_ids: Vec<i64> = totals.keys().copied().collect();
    let names = name_map(store.display_names(&user_ids).await?);

    Ok(rank_weekly(
        week_id,
        totals.iter().map(|(&user_id, &score)| (user_id, score)),
        &names,
    ))
}

pub async fn calculate_weekly_standings<S>(
    store: &S,
    week_id: i64,
    options: ScoringOptions,
) -> StandingsResult<WeeklyCalculation>
where
    S: StandingsStore + ?Sized,
{
    if week_id <= 0 {
        return Err(StandingsError::InvalidWeekId);
    }

    tracing::info!(week_id, "Calculating weekly standings");

    let outcomes = resolve_outcomes(store, week_id).await?;

    let mut report = PersistenceReport::default();
    let totals = score_picks(store, week_id, &outcomes, options, &mut report).await?;

    upsert_standings(store, week_id, &totals, options, &mut report).await;

    let standings = build_weekly_standings(store, week_id, &totals).await?;

    if report.is_clean() {
        tracing::info!(week_id, users = totals.len(), "Weekly standings calculated");
    } else {
        tracing::warn!(
            week_id,
            users = totals.len(),
            failed_writes = report.failures.len(),
            "Weekly standings calculated with persistence failures"
        );
    }

    Ok(WeeklyCalculation { standings, report })
}

pub async fn calculate_overall_standings<S>(store: &S) -> StandingsResult<Vec<OverallStandingEntry>>
where
    S: StandingsStore + ?Sized,
{
    let totals = store.score_totals().await?;

    if totals.is_empty() {
        return Err(StandingsError::NoStandingsData);
    }

    let user_ids: Vec<i64> = totals.iter().map(|t| t.user_id).collect();
    let names = name_map(store.display_names(&user_ids).await?);

    let mut entries: Vec<OverallStandingEntry> = totals
        .into_iter()
        .map(|total| OverallStandingEntry {
            user_id: total.user_id,
            display_name: display_name(&names, total.user_id),
            total_score: total.total_score.unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then(a.user_id.cmp(&b.user_id))
    });

    tracing::info!(users = entries.len(), "Overall standings calculated");

    Ok(entries)
}
