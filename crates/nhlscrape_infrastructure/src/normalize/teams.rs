use serde::Deserialize;
use serde_json::Value;

use nhlscrape_interface::errors::Result;
use nhlscrape_interface::teams::model::Team;

use super::from_value;
use crate::query::query;

pub const TEAMS_PATH: &str = "$..teams.(id,teamName,locationName,abbreviation)";

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
struct TeamRecord {
    id: u32,
    teamName: String,
    locationName: String,
    abbreviation: String,
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team {
            id: record.id,
            name: record.teamName,
            city: record.locationName,
            abbreviation: record.abbreviation,
        }
    }
}

/// One team per record of the teams listing, in encounter order.
pub fn teams_from_document(document: &Value) -> Result<Vec<Team>> {
    query(document, TEAMS_PATH)?
        .into_iter()
        .map(|record| from_value::<TeamRecord>(record, "team record").map(Team::from))
        .collect()
}
