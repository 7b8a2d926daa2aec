use serde::{Deserialize, Serialize};

use crate::table::Tabular;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub team_id: u32,
    pub player_id: u32,
    pub name: String,
    pub position: String,
}

impl Tabular for Player {
    fn columns() -> &'static [&'static str] {
        &["team_id", "player_id", "name", "position"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.team_id.to_string(),
            self.player_id.to_string(),
            self.name.clone(),
            self.position.clone(),
        ]
    }
}

// Roster expansion response (`teams?teamId=..&expand=team.roster`).

#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    pub teams: Vec<RosterTeam>,
}

#[derive(Debug, Deserialize)]
pub struct RosterTeam {
    pub id: u32,
    pub roster: Roster,
}

#[derive(Debug, Deserialize)]
pub struct Roster {
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub person: Person,
    pub position: RosterPosition,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct Person {
    pub id: u32,
    pub fullName: String,
}

#[derive(Debug, Deserialize)]
pub struct RosterPosition {
    pub abbreviation: String,
}
