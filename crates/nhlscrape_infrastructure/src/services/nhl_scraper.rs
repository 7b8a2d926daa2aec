use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use nhlscrape_interface::boxscore::model::{
    BoxScore, BoxScoreEntry, BoxScoreFormat, BoxScoreRow,
};
use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::nhl::service::NhlEndpointHandle;
use nhlscrape_interface::players::model::Player;
use nhlscrape_interface::schedule::model::{GameCounts, ScheduleQuery};
use nhlscrape_interface::teams::model::Team;

use crate::cache::{OnceCache, ScheduleCache};
use crate::normalize;

const LINESCORE_EXPANSION: &str = "schedule.linescore";

/// Teams, rosters, schedules and box scores from the NHL statistics API.
///
/// The team list, the raw roster response and the per-date schedule are
/// fetched once and kept for the lifetime of the scraper. Box scores and
/// date-range schedules are fetched on every call.
pub struct NhlScraper {
    endpoint: NhlEndpointHandle,
    teams_cache: OnceCache<Vec<Team>>,
    roster_cache: OnceCache<Value>,
    schedule_cache: ScheduleCache,
}

impl NhlScraper {
    pub fn new(endpoint: NhlEndpointHandle) -> Self {
        Self {
            endpoint,
            teams_cache: OnceCache::new("teams"),
            roster_cache: OnceCache::new("roster"),
            schedule_cache: ScheduleCache::new(),
        }
    }

    /// Swap the transport. Cached data is kept.
    pub fn set_endpoint(&mut self, endpoint: NhlEndpointHandle) {
        self.endpoint = endpoint;
    }

    pub fn teams(&mut self) -> Result<&[Team]> {
        let endpoint = &self.endpoint;
        let teams = self.teams_cache.get_or_try_populate(|| {
            let document = endpoint.teams_endpoint()?;
            normalize::teams::teams_from_document(&document)
        })?;

        Ok(teams.as_slice())
    }

    /// Every rostered player of every team. The roster response is cached;
    /// the rows are rebuilt from it on each call.
    pub fn players(&mut self) -> Result<Vec<Player>> {
        let team_ids = if self.roster_cache.is_populated() {
            Vec::new()
        } else {
            self.teams()?.iter().map(|team| team.id).collect()
        };

        let endpoint = &self.endpoint;
        let roster = self
            .roster_cache
            .get_or_try_populate(|| endpoint.players_endpoint(&team_ids))?;

        normalize::players::flatten_roster(roster)
    }

    /// Number of dates in `[start_date, end_date]` each team plays on.
    pub fn games_count(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<GameCounts> {
        check_range(start_date, end_date)?;

        let mut counts = GameCounts::default();
        for date in start_date.iter_days().take_while(|date| *date <= end_date) {
            for team_id in self.teams_playing_one_day(date)? {
                counts.record(*team_id);
            }
        }

        info!(%start_date, %end_date, teams = counts.len(), "counted games");
        Ok(counts)
    }

    /// Teams playing on `date`, fetched on the first request for that date.
    pub fn teams_playing_one_day(&mut self, date: NaiveDate) -> Result<&[u32]> {
        let endpoint = &self.endpoint;
        self.schedule_cache.get_or_try_fetch(date, || {
            let schedule = endpoint.schedule_endpoint(&ScheduleQuery::for_date(date))?;
            normalize::schedule::teams_playing(&schedule)
        })
    }

    /// Teams playing on `date` as already cached; never fetches.
    pub fn cached_teams_playing(&self, date: NaiveDate) -> Result<&[u32]> {
        self.schedule_cache.lookup(date)
    }

    pub fn box_score(&self, game_id: u64, format: BoxScoreFormat) -> Result<BoxScore> {
        debug!(game_id, %format, "box score");
        let document = self.endpoint.boxscore_endpoint(game_id)?;

        match format {
            BoxScoreFormat::Json => Ok(BoxScore::Json(document)),
            BoxScoreFormat::Table => {
                let rows = normalize::boxscore::box_score_entries(&document)?
                    .iter()
                    .map(BoxScoreRow::from)
                    .collect();
                Ok(BoxScore::Table(rows))
            }
        }
    }

    pub fn box_score_entries(&self, game_id: u64) -> Result<Vec<BoxScoreEntry>> {
        let document = self.endpoint.boxscore_endpoint(game_id)?;
        normalize::boxscore::box_score_entries(&document)
    }

    /// Flattened box scores of every game in the range, in schedule order.
    pub fn box_scores_for_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<BoxScoreRow>> {
        let mut rows = Vec::new();
        for game_id in self.games(start_date, end_date)? {
            let entries = self.box_score_entries(game_id)?;
            rows.extend(entries.iter().map(BoxScoreRow::from));
        }

        Ok(rows)
    }

    /// Ids of the games scheduled in `[start_date, end_date]`.
    pub fn games(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<u64>> {
        check_range(start_date, end_date)?;

        let schedule = self
            .endpoint
            .schedule_endpoint(&ScheduleQuery::range(start_date, end_date))?;
        normalize::schedule::game_ids(&schedule)
    }

    /// Raw game summaries, with line scores, of the games in the range.
    pub fn linescores(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<Value>> {
        check_range(start_date, end_date)?;

        let query = ScheduleQuery::range(start_date, end_date).expand(LINESCORE_EXPANSION);
        let schedule = self.endpoint.schedule_endpoint(&query)?;
        normalize::schedule::games(&schedule)
    }
}

fn check_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<()> {
    if start_date > end_date {
        return Err(AppError::RangeError {
            msg: format!("end date {end_date} must not be before start date {start_date}"),
        });
    }

    Ok(())
}
