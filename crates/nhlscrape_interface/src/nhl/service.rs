use serde_json::Value;

use crate::errors::Result;
use crate::schedule::model::ScheduleQuery;

/// Transport for the NHL statistics API.
///
/// Implementors only provide `get`; the endpoint methods build their paths on
/// top of it. Test doubles override the endpoint methods directly to serve
/// fixtures.
pub trait NhlEndpoint {
    /// GET `{base_url}/{api}` and return the JSON body.
    fn get(&self, api: &str) -> Result<Value>;

    fn teams_endpoint(&self) -> Result<Value> {
        self.get("teams")
    }

    fn schedule_endpoint(&self, query: &ScheduleQuery) -> Result<Value> {
        self.get(&query.path())
    }

    fn players_endpoint(&self, team_ids: &[u32]) -> Result<Value> {
        let team_ids = team_ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.get(&format!("teams?teamId={team_ids}&expand=team.roster"))
    }

    fn boxscore_endpoint(&self, game_id: u64) -> Result<Value> {
        self.get(&format!("game/{game_id}/boxscore"))
    }
}

pub type NhlEndpointHandle = Box<dyn NhlEndpoint>;
