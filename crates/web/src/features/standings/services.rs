use sqlx::PgPool;
use storage::{
    dto::standings::{OverallStandingEntry, WeeklyStandingsResponse},
    error::{Result, StandingsResult},
    repository::{standings::StandingsRepository, user::UserRepository, week::WeekRepository},
    services::standings_computation::{self, ScoringOptions},
    store::PgStandingsStore,
};

/// Score a week's picks, persist the results and return the ranking
pub async fn calculate_weekly_standings(
    pool: &PgPool,
    week_id: i64,
    options: ScoringOptions,
) -> StandingsResult<WeeklyStandingsResponse> {
    let store = PgStandingsStore::new(pool);
    let run = standings_computation::calculate_weekly_standings(&store, week_id, options).await?;

    tracing::debug!(
        week_id,
        attempted = run.report.attempted,
        succeeded = run.report.succeeded(),
        "Weekly standings persistence"
    );

    Ok(run.standings)
}

/// Season leaderboard from the accumulated standings rows
pub async fn calculate_overall_standings(pool: &PgPool) -> StandingsResult<Vec<OverallStandingEntry>> {
    let store = PgStandingsStore::new(pool);
    standings_computation::calculate_overall_standings(&store).await
}

/// Standings already stored for a week, without rescoring
pub async fn get_week_standings(pool: &PgPool, week_id: i64) -> Result<WeeklyStandingsResponse> {
    WeekRepository::new(pool).find_by_id(week_id).await?;

    let rows = StandingsRepository::new(pool).list_for_week(week_id).await?;
    let user_ids: Vec<i64> = rows.iter().map(|row| row.user_id).collect();
    let users = UserRepository::new(pool).find_display_names(&user_ids).await?;

    Ok(standings_computation::rank_weekly(
        week_id,
        rows.into_iter().map(|row| (row.user_id, row.score)),
        &standings_computation::name_map(users),
    ))
}
