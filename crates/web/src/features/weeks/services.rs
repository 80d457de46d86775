use sqlx::PgPool;
use storage::{
    dto::week::{ScheduledGame, WeekResponse},
    error::Result,
    repository::{game::GameRepository, week::WeekRepository},
};

/// Earliest unfinalized week of the latest season
pub async fn get_current_week(pool: &PgPool) -> Result<WeekResponse> {
    let week = WeekRepository::new(pool).find_current().await?;
    Ok(WeekResponse::from(week))
}

/// Games of a week with their teams, in kickoff order
pub async fn get_week_schedule(pool: &PgPool, week_id: i64) -> Result<Vec<ScheduledGame>> {
    let week = WeekRepository::new(pool).find_by_id(week_id).await?;
    GameRepository::new(pool).list_schedule_for_week(&week).await
}
