// Flattening of raw API documents into fixed-column records.

pub mod boxscore;
pub mod players;
pub mod schedule;
pub mod teams;

use serde::de::DeserializeOwned;
use serde_json::Value;

use nhlscrape_interface::errors::{AppError, Result};

pub(crate) fn from_value<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| AppError::JsonError {
        msg: format!("{what}: {e}"),
    })
}
