//! Client for the dashboard JSON API.

use bbs_core::api::{ChartsResponse, ErrorBody, EventRequest, EventResponse};
use bbs_core::City;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Request never got a response, or the body was not the expected JSON
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error status
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// API client rooted at the page's own origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client for the server that served the page.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn station_map(&self, city: City) -> Result<EventResponse, ClientError> {
        let request = self
            .http
            .get(self.url("/api/station-map"))
            .query(&[("city", city.as_str())]);
        decode(request.send().await?).await
    }

    pub async fn send_event(&self, event: &EventRequest) -> Result<EventResponse, ClientError> {
        let request = self.http.post(self.url("/api/event")).json(event);
        decode(request.send().await?).await
    }

    pub async fn charts(&self) -> Result<ChartsResponse, ClientError> {
        decode(self.http.get(self.url("/api/charts")).send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = ApiClient::new("http://localhost:8050/");
        assert_eq!(client.url("/api/charts"), "http://localhost:8050/api/charts");
    }
}
