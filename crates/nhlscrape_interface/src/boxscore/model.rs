use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::table::{optional_cell, Tabular};

// Raw box score response (`game/{id}/boxscore`), read only as deep as the
// flattening needs. Stat blocks stay untyped until the position is known.

#[derive(Debug, Deserialize)]
pub struct BoxScoreResponse {
    pub teams: BoxScoreTeams,
}

#[derive(Debug, Deserialize)]
pub struct BoxScoreTeams {
    pub away: TeamBoxScore,
    pub home: TeamBoxScore,
}

#[derive(Debug, Deserialize)]
pub struct TeamBoxScore {
    pub team: TeamRef,
    // Keyed by "ID{playerId}", in document order.
    pub players: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct TeamRef {
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlayerBoxScore {
    pub person: BoxScorePerson,
    pub position: PositionCode,
    #[serde(default)]
    pub stats: Map<String, Value>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct BoxScorePerson {
    pub id: u32,
    pub fullName: String,
}

#[derive(Debug, Deserialize)]
pub struct PositionCode {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionCategory {
    Goaltender,
    Skater,
}

impl PositionCategory {
    /// `None` for codes that carry no stat block (scratches, "N/A").
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "G" => Some(PositionCategory::Goaltender),
            "C" | "LW" | "RW" | "D" => Some(PositionCategory::Skater),
            _ => None,
        }
    }

    /// Key of the stat block inside a player's `stats` object.
    pub fn stats_key(&self) -> &'static str {
        match self {
            PositionCategory::Goaltender => "goalieStats",
            PositionCategory::Skater => "skaterStats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GoaltenderStats {
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub saves: u32,
    #[serde(alias = "pim")]
    pub penalty_minutes: u32,
    // Empty when the goaltender did not get the decision.
    #[serde(default)]
    pub decision: String,
    #[serde(alias = "timeOnIce")]
    pub time_on_ice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkaterStats {
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    #[serde(alias = "penaltyMinutes")]
    pub penalty_minutes: u32,
    pub hits: u32,
    #[serde(alias = "timeOnIce")]
    pub time_on_ice: String,
    #[serde(alias = "faceOffWins")]
    pub faceoff_wins: u32,
    #[serde(alias = "plusMinus")]
    pub plus_minus: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StatLine {
    Goaltender(GoaltenderStats),
    Skater(SkaterStats),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxScoreEntry {
    pub name: String,
    pub id: u32,
    pub team_id: u32,
    pub stats: StatLine,
}

/// One flat row per player. Columns that do not apply to the player's role
/// stay `None`; they are never filled with zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BoxScoreRow {
    pub name: String,
    pub id: u32,
    pub team_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on_ice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faceoff_wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_minus: Option<i32>,
}

impl From<&BoxScoreEntry> for BoxScoreRow {
    fn from(entry: &BoxScoreEntry) -> Self {
        let row = BoxScoreRow {
            name: entry.name.clone(),
            id: entry.id,
            team_id: entry.team_id,
            ..Default::default()
        };

        match &entry.stats {
            StatLine::Goaltender(stats) => BoxScoreRow {
                goals: Some(stats.goals),
                assists: Some(stats.assists),
                shots: Some(stats.shots),
                saves: Some(stats.saves),
                penalty_minutes: Some(stats.penalty_minutes),
                decision: Some(stats.decision.clone()),
                time_on_ice: Some(stats.time_on_ice.clone()),
                ..row
            },
            StatLine::Skater(stats) => BoxScoreRow {
                goals: Some(stats.goals),
                assists: Some(stats.assists),
                shots: Some(stats.shots),
                penalty_minutes: Some(stats.penalty_minutes),
                hits: Some(stats.hits),
                time_on_ice: Some(stats.time_on_ice.clone()),
                faceoff_wins: Some(stats.faceoff_wins),
                plus_minus: Some(stats.plus_minus),
                ..row
            },
        }
    }
}

impl Tabular for BoxScoreRow {
    fn columns() -> &'static [&'static str] {
        &[
            "name",
            "id",
            "team_id",
            "goals",
            "assists",
            "shots",
            "saves",
            "penalty_minutes",
            "decision",
            "hits",
            "time_on_ice",
            "faceoff_wins",
            "plus_minus",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.to_string(),
            self.team_id.to_string(),
            optional_cell(&self.goals),
            optional_cell(&self.assists),
            optional_cell(&self.shots),
            optional_cell(&self.saves),
            optional_cell(&self.penalty_minutes),
            optional_cell(&self.decision),
            optional_cell(&self.hits),
            optional_cell(&self.time_on_ice),
            optional_cell(&self.faceoff_wins),
            optional_cell(&self.plus_minus),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxScoreFormat {
    // The raw document as returned by the API.
    Json,
    // Flattened rows.
    Table,
}

impl FromStr for BoxScoreFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(BoxScoreFormat::Json),
            "table" => Ok(BoxScoreFormat::Table),
            other => Err(AppError::UnsupportedFormatError {
                msg: format!("'{other}' is not supported, use one of: table, json"),
            }),
        }
    }
}

impl fmt::Display for BoxScoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoxScoreFormat::Json => write!(f, "json"),
            BoxScoreFormat::Table => write!(f, "table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoxScore {
    Json(Value),
    Table(Vec<BoxScoreRow>),
}
