//! Country data source: the countries GraphQL API or a local JSON file.

use std::path::Path;

use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::country::Country;
use crate::{Config, Error, Result};

/// The single query the browser needs.
pub const COUNTRIES_QUERY: &str = "query GetCountries {
  countries {
    code
    name
    native
    capital
    emoji
    currency
    languages {
      code
      name
    }
  }
}";

/// State of the country fetch as seen by the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemoteData {
    #[default]
    Loading,
    Failed(String),
    Ready(Vec<Country>),
}

impl RemoteData {
    pub fn countries(&self) -> Option<&[Country]> {
        match self {
            RemoteData::Ready(list) => Some(list),
            _ => None,
        }
    }
}

impl From<Result<Vec<Country>>> for RemoteData {
    fn from(result: Result<Vec<Country>>) -> Self {
        match result {
            Ok(list) => RemoteData::Ready(list),
            Err(e) => RemoteData::Failed(e.to_string()),
        }
    }
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<CountriesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct CountriesData {
    countries: Option<Vec<Country>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Client for the countries GraphQL endpoint.
#[derive(Clone)]
pub struct CountriesClient {
    endpoint: String,
    http_client: Client,
    timeout: std::time::Duration,
}

impl CountriesClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            http_client: Client::new(),
            timeout: config.timeout(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run [`COUNTRIES_QUERY`] and return every country in provider order.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        info!("fetching countries from {}", self.endpoint);

        let body = serde_json::json!({
            "operationName": "GetCountries",
            "query": COUNTRIES_QUERY,
            "variables": {},
        });

        let response = self
            .http_client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("countries request failed with HTTP {}", status.as_u16());
            return Err(Error::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        let countries = decode_response(&text)?;
        info!("received {} countries", countries.len());
        Ok(countries)
    }
}

/// Decode a GraphQL response body into the country list.
pub fn decode_response(body: &str) -> Result<Vec<Country>> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        warn!("GraphQL errors: {:?}", messages);
        return Err(Error::GraphQl(messages.join("; ")));
    }

    envelope
        .data
        .and_then(|d| d.countries)
        .ok_or_else(|| Error::GraphQl("response contained no data".to_string()))
}

/// Load countries from a JSON file: either a bare array or a full GraphQL response.
pub fn load_countries_file(path: &Path) -> Result<Vec<Country>> {
    let contents = std::fs::read_to_string(path)?;
    if contents.trim_start().starts_with('[') {
        Ok(serde_json::from_str(&contents)?)
    } else {
        decode_response(&contents)
    }
}
