use sqlx::PgPool;
use storage::{dto::game::GameDetail, error::Result, repository::game::GameRepository};

pub async fn get_game(pool: &PgPool, game_id: i64) -> Result<Option<GameDetail>> {
    GameRepository::new(pool).find_detail(game_id).await
}
