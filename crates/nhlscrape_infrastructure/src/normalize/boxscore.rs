use serde_json::Value;
use tracing::trace;

use nhlscrape_interface::boxscore::model::{
    BoxScoreEntry, BoxScoreResponse, PlayerBoxScore, PositionCategory, StatLine, TeamBoxScore,
};
use nhlscrape_interface::errors::Result;

use super::from_value;

/// Player entries of a box score, away team first, players in document order.
///
/// Entries whose position carries no stat block (scratches, "N/A") are left
/// out, as are goaltenders and skaters that did not play and therefore have
/// no stat block.
pub fn box_score_entries(box_score: &Value) -> Result<Vec<BoxScoreEntry>> {
    let response: BoxScoreResponse = from_value(box_score.clone(), "box score")?;

    let mut entries = Vec::new();
    for team in [&response.teams.away, &response.teams.home] {
        team_entries(team, &mut entries)?;
    }

    Ok(entries)
}

fn team_entries(team: &TeamBoxScore, entries: &mut Vec<BoxScoreEntry>) -> Result<()> {
    for (key, player) in &team.players {
        let player: PlayerBoxScore = from_value(player.clone(), key)?;

        let Some(category) = PositionCategory::from_code(&player.position.code) else {
            trace!(player = %key, code = %player.position.code, "no stat block for position");
            continue;
        };
        let Some(block) = player.stats.get(category.stats_key()) else {
            trace!(player = %key, "did not play");
            continue;
        };

        let stats = match category {
            PositionCategory::Goaltender => {
                StatLine::Goaltender(from_value(block.clone(), category.stats_key())?)
            }
            PositionCategory::Skater => {
                StatLine::Skater(from_value(block.clone(), category.stats_key())?)
            }
        };

        entries.push(BoxScoreEntry {
            name: player.person.fullName,
            id: player.person.id,
            team_id: team.team.id,
            stats,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhlscrape_interface::boxscore::model::{BoxScoreRow, GoaltenderStats};
    use nhlscrape_interface::errors::AppError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn box_score(away_players: Value, home_players: Value) -> Value {
        json!({
            "copyright": "NHL",
            "teams": {
                "away": {"team": {"id": 3, "name": "New York Rangers"}, "teamStats": {}, "players": away_players},
                "home": {"team": {"id": 17, "name": "Detroit Red Wings"}, "teamStats": {}, "players": home_players}
            },
            "officials": []
        })
    }

    fn goalie_stats() -> Value {
        json!({"timeOnIce": "58:51", "assists": 0, "goals": 0, "pim": 0, "shots": 33, "saves": 30,
               "powerPlaySaves": 5, "decision": "L", "savePercentage": 90.9})
    }

    fn skater_stats(plus_minus: i32) -> Value {
        json!({"timeOnIce": "17:20", "assists": 1, "goals": 0, "shots": 2, "hits": 1,
               "powerPlayGoals": 0, "faceOffWins": 7, "faceoffTaken": 12, "takeaways": 0,
               "giveaways": 1, "blocked": 0, "plusMinus": plus_minus, "penaltyMinutes": 2})
    }

    #[test]
    fn branches_on_position_code() {
        let document = box_score(
            json!({
                "ID8468685": {"person": {"id": 8468685, "fullName": "Henrik Lundqvist"},
                              "position": {"code": "G", "abbreviation": "G"},
                              "stats": {"goalieStats": goalie_stats()}},
                "ID8476459": {"person": {"id": 8476459, "fullName": "Mika Zibanejad"},
                              "position": {"code": "C", "abbreviation": "C"},
                              "stats": {"skaterStats": skater_stats(-1)}}
            }),
            json!({
                "ID8477946": {"person": {"id": 8477946, "fullName": "Dylan Larkin"},
                              "position": {"code": "C", "abbreviation": "C"},
                              "stats": {"skaterStats": skater_stats(1)}}
            }),
        );

        let entries = box_score_entries(&document).unwrap();

        let ids = entries
            .iter()
            .map(|e| (e.team_id, e.id))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![(3, 8468685), (3, 8476459), (17, 8477946)]);
        assert_eq!(
            entries[0].stats,
            StatLine::Goaltender(GoaltenderStats {
                goals: 0,
                assists: 0,
                shots: 33,
                saves: 30,
                penalty_minutes: 0,
                decision: "L".to_string(),
                time_on_ice: "58:51".to_string(),
            })
        );

        let row = BoxScoreRow::from(&entries[1]);
        assert_eq!(row.plus_minus, Some(-1));
        assert_eq!(row.penalty_minutes, Some(2));
        assert_eq!(row.saves, None);
    }

    #[test]
    fn scratches_and_unused_goalies_are_skipped() {
        let document = box_score(
            json!({
                "ID8474151": {"person": {"id": 8474151, "fullName": "Ryan McDonagh"},
                              "position": {"code": "N/A", "abbreviation": "N/A"}, "stats": {}},
                "ID8471418": {"person": {"id": 8471418, "fullName": "Ondrej Pavelec"},
                              "position": {"code": "G", "abbreviation": "G"}, "stats": {}}
            }),
            json!({}),
        );

        assert!(box_score_entries(&document).unwrap().is_empty());
    }

    #[test]
    fn incomplete_stat_block_is_an_extraction_failure() {
        let document = box_score(
            json!({
                "ID8476459": {"person": {"id": 8476459, "fullName": "Mika Zibanejad"},
                              "position": {"code": "C"},
                              "stats": {"skaterStats": {"goals": 1}}}
            }),
            json!({}),
        );

        assert!(matches!(
            box_score_entries(&document),
            Err(AppError::JsonError { .. })
        ));
    }
}
