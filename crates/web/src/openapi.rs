use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::standings::handlers::calculate_weekly,
        features::standings::handlers::calculate_overall,
        features::standings::handlers::get_week_standings,
        features::weeks::handlers::get_current_week,
        features::weeks::handlers::get_week_schedule,
        features::games::handlers::get_game,
        features::picks::handlers::list_picks,
    ),
    components(
        schemas(
            storage::dto::standings::CalculateWeeklyRequest,
            storage::dto::standings::WeeklyStandingEntry,
            storage::dto::standings::WeeklyStandingsResponse,
            storage::dto::standings::OverallStandingEntry,
            storage::dto::week::WeekResponse,
            storage::dto::week::WeekInfo,
            storage::models::Team,
            storage::dto::week::ScheduledGame,
            storage::dto::game::FinalScore,
            storage::dto::game::GameDetail,
            storage::dto::pick::PickUser,
            storage::dto::pick::PickGame,
            storage::dto::pick::PickDetail,
            storage::dto::pick::AdminPickView,
            storage::models::GameStatus,
            storage::models::PickWinner,
        )
    ),
    tags(
        (name = "standings", description = "Standings calculation (admin) and lookup endpoints"),
        (name = "weeks", description = "Week and schedule endpoints"),
        (name = "games", description = "Game detail endpoints"),
        (name = "picks", description = "Pick inspection (admin) endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
