use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use tracing::debug;

use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::rotowire::service::RotowireEndpoint;

pub const ROTOWIRE_URL: &str = "https://www.rotowire.com/hockey";

/// RotoWire hockey pages over HTTP.
pub struct RotowireApiEndpoint {
    client: Client,
}

impl RotowireApiEndpoint {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn request(&self, page: &str) -> RequestBuilder {
        self.client.get(format!("{ROTOWIRE_URL}/{page}"))
    }
}

impl RotowireEndpoint for RotowireApiEndpoint {
    fn get(&self, page: &str) -> Result<String> {
        let url = format!("{ROTOWIRE_URL}/{page}");
        debug!(%url, "GET");

        // The page carries no error payload; only the HTTP status tells.
        let response = self
            .request(page)
            .send()
            .map_err(|e| AppError::RemoteError { msg: e.to_string() })?;
        check_status(&url, response.status())?;

        response
            .text()
            .map_err(|e| AppError::RemoteError { msg: e.to_string() })
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if !status.is_success() {
        return Err(AppError::RemoteError {
            msg: format!("{url} answered {status}"),
        });
    }

    Ok(())
}
