use axum::extract::FromRef;
use storage::Database;
use storage::services::standings_computation::ScoringOptions;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub scoring: ScoringOptions,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
