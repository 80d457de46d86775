use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{calculate_overall, calculate_weekly, get_week_standings};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/calculate/weekly", post(calculate_weekly))
        .route("/calculate/overall", post(calculate_overall))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/weeks/:week_id", get(get_week_standings))
        .merge(protected)
}
