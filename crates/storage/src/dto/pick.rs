use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::parse_positive_id_str;
use crate::models::{GameStatus, PickWinner, Team};

/// Raw query string of the admin picks view.
///
/// Values are kept as text so a malformed one is reported as a JSON 400
/// instead of an extractor rejection. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PickFilter {
    /// Only picks made by this user
    #[serde(alias = "userId")]
    #[param(value_type = Option<i64>)]
    pub user_id: Option<String>,
    /// Only games of this season
    #[param(value_type = Option<i32>)]
    pub season: Option<String>,
    /// Only games of this week number
    #[param(value_type = Option<i32>)]
    pub week: Option<String>,
}

/// Validated form of [`PickFilter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickQuery {
    pub user_id: Option<i64>,
    pub season: Option<i32>,
    pub week: Option<i32>,
}

impl PickFilter {
    pub fn validate(&self) -> Result<PickQuery, String> {
        Ok(PickQuery {
            user_id: parse_optional(self.user_id.as_deref(), "user_id")?,
            season: parse_optional(self.season.as_deref(), "season")?
                .map(i32::try_from)
                .transpose()
                .map_err(|_| "Invalid season".to_string())?,
            week: parse_optional(self.week.as_deref(), "week")?
                .map(i32::try_from)
                .transpose()
                .map_err(|_| "Invalid week".to_string())?,
        })
    }
}

fn parse_optional(value: Option<&str>, field: &str) -> Result<Option<i64>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_positive_id_str(text)
            .map(Some)
            .ok_or_else(|| format!("Invalid {field}")),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickUser {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickGame {
    pub id: i64,
    pub season: i32,
    pub week: i32,
    pub home: Team,
    pub away: Team,
    pub kickoff_at: DateTime<Utc>,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickDetail {
    pub winner_side: PickWinner,
    /// Code of the team on `winner_side`
    pub selected_team: String,
    pub margin: i32,
    /// Points awarded by the last weekly calculation, null until then
    pub score: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One pick as shown to administrators
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminPickView {
    pub id: i64,
    pub user: PickUser,
    pub game: PickGame,
    pub pick: PickDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(user_id: Option<&str>, season: Option<&str>, week: Option<&str>) -> PickFilter {
        PickFilter {
            user_id: user_id.map(String::from),
            season: season.map(String::from),
            week: week.map(String::from),
        }
    }

    #[test]
    fn empty_filter_selects_everything() {
        assert_eq!(filter(None, None, None).validate(), Ok(PickQuery::default()));
        assert_eq!(filter(Some(""), Some(" "), None).validate(), Ok(PickQuery::default()));
    }

    #[test]
    fn numeric_values_are_parsed() {
        assert_eq!(
            filter(Some("3"), Some("2025"), Some("2")).validate(),
            Ok(PickQuery {
                user_id: Some(3),
                season: Some(2025),
                week: Some(2),
            })
        );
    }

    #[test]
    fn malformed_values_name_the_field() {
        assert_eq!(
            filter(Some("abc"), None, None).validate(),
            Err("Invalid user_id".to_string())
        );
        assert_eq!(
            filter(None, Some("0"), None).validate(),
            Err("Invalid season".to_string())
        );
        assert_eq!(
            filter(None, None, Some("9999999999")).validate(),
            Err("Invalid week".to_string())
        );
    }

    #[test]
    fn camel_case_user_id_is_accepted() {
        let filter: PickFilter = serde_json::from_value(serde_json::json!({ "userId": "7" })).unwrap();
        assert_eq!(filter.validate().unwrap().user_id, Some(7));
    }
}
