use chrono::{Local, NaiveDate};

use nhlscrape_interface::errors::Result;
use nhlscrape_interface::goalies::model::GoalieProjection;
use nhlscrape_interface::rotowire::service::RotowireEndpointHandle;

use crate::cache::OnceCache;
use crate::goalie_grid::extract_goalie_grid;

/// Starting goalie projections from RotoWire. The page is fetched once and
/// parsed again on every call.
pub struct GoalieScraper {
    endpoint: RotowireEndpointHandle,
    page_cache: OnceCache<String>,
}

impl GoalieScraper {
    pub fn new(endpoint: RotowireEndpointHandle) -> Self {
        Self {
            endpoint,
            page_cache: OnceCache::new("starting goalies"),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: RotowireEndpointHandle) {
        self.endpoint = endpoint;
    }

    /// Projections dated from today.
    pub fn starting_goalies(&mut self) -> Result<Vec<GoalieProjection>> {
        self.starting_goalies_on(Local::now().date_naive())
    }

    /// Projections dated from `reference_date`, the first day of the grid.
    pub fn starting_goalies_on(
        &mut self,
        reference_date: NaiveDate,
    ) -> Result<Vec<GoalieProjection>> {
        let endpoint = &self.endpoint;
        let page = self
            .page_cache
            .get_or_try_populate(|| endpoint.starting_goalies_endpoint())?;

        extract_goalie_grid(page, reference_date)
    }
}
