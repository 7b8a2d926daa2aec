use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::nhl::service::NhlEndpoint;

pub const NHL_URL: &str = "https://statsapi.web.nhl.com/api/v1";

/// The NHL statistics API over HTTP.
pub struct NhlApiEndpoint {
    client: Client,
}

impl NhlApiEndpoint {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GET `api` under the API root, always asking for JSON.
    fn request(&self, api: &str) -> RequestBuilder {
        self.client
            .get(format!("{NHL_URL}/{api}"))
            .query(&[("format", "json")])
    }
}

impl NhlEndpoint for NhlApiEndpoint {
    fn get(&self, api: &str) -> Result<Value> {
        let url = format!("{NHL_URL}/{api}");
        debug!(%url, "GET");

        // The API reports failures through an "error" key, whatever the status.
        let response = self
            .request(api)
            .send()
            .map_err(|e| AppError::RemoteError { msg: e.to_string() })?;
        let status = response.status();

        let body = response.json::<Value>().map_err(|e| AppError::RemoteError {
            msg: format!("{url} answered {status} with an unreadable body: {e}"),
        })?;

        reject_error_payload(body).map_err(|e| {
            warn!(%url, %status, "statistics API returned an error payload");
            e
        })
    }
}

fn reject_error_payload(body: Value) -> Result<Value> {
    if body.get("error").is_some() {
        return Err(AppError::RemoteError {
            msg: body.to_string(),
        });
    }

    Ok(body)
}
