//! Native HTTP data source.

use log::debug;
use serde_json::Value;
use wells_core::models::decode_response;
use wells_core::refresh::StatsSource;
use wells_core::{DashError, Result};

/// `reqwest` client pointed at the dashboard backend.
#[derive(Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl StatsSource for HttpSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        let request_error = |e: reqwest::Error| DashError::Request {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        };

        debug!("GET {}", endpoint);
        let response = self.client.get(endpoint).send().await.map_err(request_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(request_error)?;
        decode_response(endpoint, status, &text)
    }
}
