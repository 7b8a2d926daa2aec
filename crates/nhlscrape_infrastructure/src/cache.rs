// In-memory caches owned by a scraper. Unbounded, never invalidated.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use nhlscrape_interface::errors::{AppError, Result};

/// A value computed at most once per owner.
#[derive(Debug)]
pub struct OnceCache<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> OnceCache<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn is_populated(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the cached value, running `populate` first if there is none.
    /// A failed populate leaves the cache empty.
    pub fn get_or_try_populate<F>(&mut self, populate: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        let value = match self.value.take() {
            Some(value) => {
                debug!(cache = self.name, "cache hit");
                value
            }
            None => {
                debug!(cache = self.name, "cache miss, populating");
                populate()?
            }
        };

        Ok(self.value.insert(value))
    }
}

/// Ids of the teams playing on each fetched date.
///
/// `lookup` only trusts what is already stored and fails on a miss;
/// `get_or_try_fetch` fetches and stores missing dates.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    by_date: HashMap<NaiveDate, Vec<u32>>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, date: NaiveDate) -> Result<&[u32]> {
        self.by_date
            .get(&date)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::CacheMissError {
                msg: format!("{date} is not in the schedule cache"),
            })
    }

    pub fn get_or_try_fetch<F>(&mut self, date: NaiveDate, fetch: F) -> Result<&[u32]>
    where
        F: FnOnce() -> Result<Vec<u32>>,
    {
        match self.by_date.entry(date) {
            Entry::Occupied(entry) => {
                debug!(%date, "schedule cache hit");
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                debug!(%date, "schedule cache miss, fetching");
                let team_ids = fetch()?;
                Ok(entry.insert(team_ids).as_slice())
            }
        }
    }
}
