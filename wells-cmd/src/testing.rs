//! Canned backend responses for command tests.

use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use wells_core::models::decode_response;
use wells_core::refresh::StatsSource;
use wells_core::{DashboardConfig, Metric, Result, Slot};

#[derive(Default)]
pub struct StubSource {
    responses: HashMap<String, (u16, String)>,
    requests: RefCell<Vec<String>>,
}

impl StubSource {
    /// Valid responses for all eight grouped endpoints and the summary.
    pub fn complete(config: &DashboardConfig) -> Self {
        let mut source = Self::default();
        for metric in Metric::ALL {
            for slot in Slot::ALL {
                let mut body = Map::new();
                body.insert(slot.label_field().to_string(), json!(["A", "B"]));
                body.insert(metric.series_field().to_string(), json!([1.5, 2.5]));
                source.insert(config.grouped_endpoint(metric, slot), 200, Value::Object(body).to_string());
            }
        }
        source.insert(
            config.summary_endpoint(),
            200,
            json!({"total_wells": 150, "avg_days": 5.7, "avg_cost": 1234.5}).to_string(),
        );
        source
    }

    pub fn insert(&mut self, endpoint: String, status: u16, body: String) {
        self.responses.insert(endpoint, (status, body));
    }

    pub fn fail(&mut self, endpoint: String, status: u16) {
        self.insert(endpoint, status, json!({"error": "Not found"}).to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl StatsSource for StubSource {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value> {
        self.requests.borrow_mut().push(endpoint.to_string());
        let (status, body) = self
            .responses
            .get(endpoint)
            .cloned()
            .unwrap_or((404, String::new()));
        decode_response(endpoint, status, &body)
    }
}
