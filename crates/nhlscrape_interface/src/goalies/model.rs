use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::Tabular;

/// Projected starter for one team on one date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GoalieProjection {
    pub team: String,
    pub goalie_name: String,
    pub date: NaiveDate,
    pub opponent_team: String,
    pub starting_status: String,
}

impl Tabular for GoalieProjection {
    fn columns() -> &'static [&'static str] {
        &["team", "goalie_name", "date", "opponent_team", "starting_status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.team.clone(),
            self.goalie_name.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.opponent_team.clone(),
            self.starting_status.clone(),
        ]
    }
}
