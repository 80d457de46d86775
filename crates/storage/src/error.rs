use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}

/// Failures that abort a standings calculation.
///
/// Per-row write failures are not errors here; they end up in a
/// [`PersistenceReport`](crate::services::report::PersistenceReport).
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("Invalid or missing week_id")]
    InvalidWeekId,

    #[error("No finalized games found for week {0}")]
    NoFinalizedGames(i64),

    #[error("No picks found for finalized games in week {0}")]
    NoPicksForWeek(i64),

    #[error("No standings data available")]
    NoStandingsData,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StandingsResult<T> = std::result::Result<T, StandingsError>;
