use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters of the `schedule` endpoint, kept in insertion order and
/// interpolated verbatim. Keys are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    params: Vec<(String, String)>,
}

impl ScheduleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::new().param("date", date.format(DATE_FORMAT))
    }

    pub fn range(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::new()
            .param("startDate", start_date.format(DATE_FORMAT))
            .param("endDate", end_date.format(DATE_FORMAT))
    }

    pub fn expand(self, expansion: &str) -> Self {
        self.param("expand", expansion)
    }

    pub fn param(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Path relative to the API root, e.g. `schedule?date=2018-01-14`.
    pub fn path(&self) -> String {
        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("schedule?{query}")
    }
}

/// Number of dates on which each team plays within a date range.
/// A team that never plays in the range reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GameCounts(BTreeMap<u32, u32>);

impl GameCounts {
    pub fn record(&mut self, team_id: u32) {
        *self.0.entry(team_id).or_insert(0) += 1;
    }

    pub fn get(&self, team_id: u32) -> u32 {
        self.0.get(&team_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(team_id, count)| (*team_id, *count))
    }
}
