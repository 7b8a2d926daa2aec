use serde_json::Value;

use nhlscrape_interface::errors::Result;
use nhlscrape_interface::players::model::{Player, RosterResponse};

use super::from_value;

/// One row per roster entry; outer team order, then roster order.
pub fn flatten_roster(roster: &Value) -> Result<Vec<Player>> {
    let response: RosterResponse = from_value(roster.clone(), "roster response")?;

    let players = response
        .teams
        .into_iter()
        .flat_map(|team| {
            let team_id = team.id;
            team.roster.roster.into_iter().map(move |entry| Player {
                team_id,
                player_id: entry.person.id,
                name: entry.person.fullName,
                position: entry.position.abbreviation,
            })
        })
        .collect();

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhlscrape_interface::errors::AppError;
    use serde_json::json;

    fn entry(id: u32, name: &str, position: &str) -> Value {
        json!({
            "person": {"id": id, "fullName": name, "link": format!("/api/v1/people/{id}")},
            "jerseyNumber": "19",
            "position": {"code": position, "name": "Center", "type": "Forward", "abbreviation": position}
        })
    }

    #[test]
    fn rows_follow_document_order() {
        let roster = json!({
            "teams": [
                {"id": 10, "roster": {"roster": [entry(8469455, "Jason Spezza", "C"), entry(8475883, "Frederik Andersen", "G")]}},
                {"id": 54, "roster": {"roster": [entry(8470594, "Marc-Andre Fleury", "G")]}}
            ]
        });

        let players = flatten_roster(&roster).unwrap();

        let summary = players
            .iter()
            .map(|p| (p.team_id, p.player_id, p.position.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![(10, 8469455, "C"), (10, 8475883, "G"), (54, 8470594, "G")]
        );
        assert_eq!(players[0].name, "Jason Spezza");
    }

    #[test]
    fn team_without_roster_block_fails() {
        let roster = json!({"teams": [{"id": 10}]});
        assert!(matches!(
            flatten_roster(&roster),
            Err(AppError::JsonError { .. })
        ));
    }
}
