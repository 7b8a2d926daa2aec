use serde_json::Value;
use tracing::warn;

use nhlscrape_interface::errors::{AppError, Result};

use crate::query::query;

/// Team ids of the first date bucket. A single-date request gets at most one
/// bucket back; later buckets of a multi-date document are ignored.
pub const TEAMS_PLAYING_PATH: &str = "$..dates[0]..games.teams..(id)";
pub const GAME_IDS_PATH: &str = "$..dates..games.gamePk";
pub const GAMES_PATH: &str = "$..dates..games";

pub fn teams_playing(schedule: &Value) -> Result<Vec<u32>> {
    let buckets = schedule
        .get("dates")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if buckets > 1 {
        warn!(buckets, "schedule has several date buckets, reading the first only");
    }

    query(schedule, TEAMS_PLAYING_PATH)?
        .iter()
        .map(|record| {
            record
                .get("id")
                .and_then(Value::as_u64)
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| AppError::JsonError {
                    msg: format!("team id is not an integer: {record}"),
                })
        })
        .collect()
}

pub fn game_ids(schedule: &Value) -> Result<Vec<u64>> {
    query(schedule, GAME_IDS_PATH)?
        .iter()
        .map(|id| {
            id.as_u64().ok_or_else(|| AppError::JsonError {
                msg: format!("game id is not an integer: {id}"),
            })
        })
        .collect()
}

pub fn games(schedule: &Value) -> Result<Vec<Value>> {
    query(schedule, GAMES_PATH)
}
