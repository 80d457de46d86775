use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::dto::common::parse_positive_id;
use crate::error::{StandingsError, StandingsResult};

/// Request body for the weekly calculation
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CalculateWeeklyRequest {
    /// Week id, as a number or a numeric string
    #[schema(value_type = Option<i64>, example = 1)]
    pub week_id: Option<Value>,
}

impl CalculateWeeklyRequest {
    pub fn week_id(&self) -> StandingsResult<i64> {
        self.week_id
            .as_ref()
            .and_then(parse_positive_id)
            .ok_or(StandingsError::InvalidWeekId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyStandingEntry {
    pub user_id: i64,
    pub display_name: String,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyStandingsResponse {
    pub week_id: i64,
    pub standings: Vec<WeeklyStandingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OverallStandingEntry {
    pub user_id: i64,
    pub display_name: String,
    pub total_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CalculateWeeklyRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn week_id_from_number_or_string() {
        assert_eq!(request(json!({ "week_id": 1 })).week_id().unwrap(), 1);
        assert_eq!(request(json!({ "week_id": "5" })).week_id().unwrap(), 5);
        assert_eq!(request(json!({ "week_id": 2.0 })).week_id().unwrap(), 2);
        assert_eq!(request(json!({ "week_id": "1e1" })).week_id().unwrap(), 10);
    }

    #[test]
    fn missing_or_malformed_week_id_is_rejected() {
        for body in [
            json!({}),
            json!({ "week_id": null }),
            json!({ "week_id": "week-1" }),
            json!({ "week_id": 0 }),
            json!({ "week_id": -2 }),
            json!({ "week_id": 1.5 }),
        ] {
            assert!(matches!(
                request(body).week_id(),
                Err(StandingsError::InvalidWeekId)
            ));
        }
    }
}
