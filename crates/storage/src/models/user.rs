use sqlx::FromRow;

/// Projection of `users` used when labelling standings rows
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserDisplayName {
    pub id: i64,
    pub display_name: Option<String>,
}
