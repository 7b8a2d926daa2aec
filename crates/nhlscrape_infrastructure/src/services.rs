use reqwest::blocking::Client;

use nhlscrape_interface::errors::{AppError, Result};

use crate::settings::{Http, Settings};

pub mod goalie_scraper;
pub mod nhl_api;
pub mod nhl_scraper;
pub mod rotowire_api;

use goalie_scraper::GoalieScraper;
use nhl_api::NhlApiEndpoint;
use nhl_scraper::NhlScraper;
use rotowire_api::RotowireApiEndpoint;

/// Scrapers wired to the real remote sources.
pub struct ServiceRegistry {
    pub nhl_scraper: NhlScraper,
    pub goalie_scraper: GoalieScraper,
}

impl ServiceRegistry {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = http_client(&settings.http)?;

        let nhl_scraper = NhlScraper::new(Box::new(NhlApiEndpoint::new(client.clone())));
        let goalie_scraper = GoalieScraper::new(Box::new(RotowireApiEndpoint::new(client)));

        Ok(Self {
            nhl_scraper,
            goalie_scraper,
        })
    }
}

fn http_client(http: &Http) -> Result<Client> {
    Client::builder()
        .user_agent(http.user_agent.as_str())
        .timeout(http.timeout())
        .build()
        .map_err(|e| AppError::RemoteError {
            msg: format!("could not build the HTTP client: {e}"),
        })
}
