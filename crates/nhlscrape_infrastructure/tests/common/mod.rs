#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use chrono::NaiveDate;
use serde_json::Value;

use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::nhl::service::NhlEndpoint;
use nhlscrape_interface::rotowire::service::RotowireEndpoint;
use nhlscrape_interface::schedule::model::ScheduleQuery;

pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

pub fn fixture(name: &str) -> Value {
    serde_json::from_str(&fixture_text(name)).unwrap()
}

pub fn count_calls(calls: &CallLog, prefix: &str) -> usize {
    calls
        .borrow()
        .iter()
        .filter(|call| call.starts_with(prefix))
        .count()
}

/// Serves the statistics API from fixtures. Schedules are only served for
/// the queries registered up front; anything else fails like a cold cache.
#[derive(Default)]
pub struct MockNhlEndpoint {
    schedules: HashMap<String, Value>,
    box_scores: HashMap<u64, Value>,
    calls: CallLog,
}

impl MockNhlEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(self, date: NaiveDate) -> Self {
        let name = format!("nhl.schedule.{}.json", date.format("%Y%m%d"));
        self.with_schedule(ScheduleQuery::for_date(date), &name)
    }

    pub fn with_schedule(mut self, query: ScheduleQuery, name: &str) -> Self {
        self.schedules.insert(query.path(), fixture(name));
        self
    }

    pub fn with_box_score(mut self, game_id: u64, name: &str) -> Self {
        self.box_scores.insert(game_id, fixture(name));
        self
    }

    pub fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl NhlEndpoint for MockNhlEndpoint {
    fn get(&self, api: &str) -> Result<Value> {
        Err(AppError::RemoteError {
            msg: format!("no fixture for {api}"),
        })
    }

    fn teams_endpoint(&self) -> Result<Value> {
        self.record("teams".to_string());
        Ok(fixture("nhl.teams.json"))
    }

    fn schedule_endpoint(&self, query: &ScheduleQuery) -> Result<Value> {
        let path = query.path();
        self.record(path.clone());
        self.schedules
            .get(&path)
            .cloned()
            .ok_or_else(|| AppError::CacheMissError {
                msg: format!("{path} is not in the schedule fixtures"),
            })
    }

    fn players_endpoint(&self, team_ids: &[u32]) -> Result<Value> {
        self.record(format!("players {}", team_ids.len()));
        Ok(fixture("nhl.players.json"))
    }

    fn boxscore_endpoint(&self, game_id: u64) -> Result<Value> {
        self.record(format!("boxscore {game_id}"));
        self.box_scores
            .get(&game_id)
            .cloned()
            .ok_or_else(|| AppError::RemoteError {
                msg: format!("{{\"error\":\"no box score for {game_id}\"}}"),
            })
    }
}

/// Serves the goalie page from a fixture, or fails the first `failures`
/// requests.
#[derive(Default)]
pub struct MockRotowireEndpoint {
    failures: RefCell<usize>,
    calls: CallLog,
}

impl MockRotowireEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failures: usize) -> Self {
        Self {
            failures: RefCell::new(failures),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }
}

impl RotowireEndpoint for MockRotowireEndpoint {
    fn get(&self, page: &str) -> Result<String> {
        self.calls.borrow_mut().push(page.to_string());

        let mut failures = self.failures.borrow_mut();
        if *failures > 0 {
            *failures -= 1;
            return Err(AppError::RemoteError {
                msg: "HTTP status server error (503 Service Unavailable)".to_string(),
            });
        }

        Ok(fixture_text("rotowire.starting-goalies.html"))
    }
}
