//! Endpoint checks for the dashboard backend.
//!
//! Every grouped endpoint is fetched and checked for its label key and series
//! key, and the series must hold only numbers. `/api/summary_stats` must carry
//! `total_wells`, `avg_cost` and `avg_days` as numbers. Results are printed one
//! line per endpoint and the command fails if any endpoint did.

use anyhow::bail;
use log::info;
use serde_json::Value;
use wells_core::refresh::StatsSource;
use wells_core::{DashboardConfig, Metric, Slot};

const SUMMARY_KEYS: [&str; 3] = ["total_wells", "avg_cost", "avg_days"];

/// Outcome of checking one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointCheck {
    pub endpoint: String,
    pub failure: Option<String>,
}

impl EndpointCheck {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl std::fmt::Display for EndpointCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.failure {
            None => write!(f, "{}: PASSED", self.endpoint),
            Some(reason) => write!(f, "{}: FAILED - {}", self.endpoint, reason),
        }
    }
}

fn missing_keys<'a>(body: &Value, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter().copied().filter(|k| body.get(k).is_none()).collect()
}

/// Check a grouped response: both keys present, series all numeric.
pub fn validate_grouped(body: &Value, slot: Slot, metric: Metric) -> Result<(), String> {
    let series_field = metric.series_field();
    let missing = missing_keys(body, &[slot.label_field(), series_field]);
    if !missing.is_empty() {
        return Err(format!("Missing keys {:?}", missing));
    }

    let numeric = body[series_field]
        .as_array()
        .is_some_and(|series| series.iter().all(Value::is_number));
    if !numeric {
        return Err(format!("{} contains invalid data types", series_field));
    }
    Ok(())
}

/// Check the summary response: all three keys present and numeric.
pub fn validate_summary(body: &Value) -> Result<(), String> {
    let missing = missing_keys(body, &SUMMARY_KEYS);
    if !missing.is_empty() {
        return Err(format!("Missing keys {:?}", missing));
    }
    for key in SUMMARY_KEYS {
        if !body[key].is_number() {
            return Err(format!("{} is not a number", key));
        }
    }
    Ok(())
}

async fn check_endpoint<S, F>(source: &S, endpoint: String, validate: F) -> EndpointCheck
where
    S: StatsSource,
    F: FnOnce(&Value) -> Result<(), String>,
{
    let failure = match source.fetch_json(&endpoint).await {
        Ok(body) => validate(&body).err(),
        Err(e) => Some(e.to_string()),
    };
    EndpointCheck { endpoint, failure }
}

/// Check the eight grouped endpoints, then the summary endpoint.
pub async fn check_all<S: StatsSource>(source: &S, config: &DashboardConfig) -> Vec<EndpointCheck> {
    let mut results = Vec::with_capacity(Metric::ALL.len() * Slot::ALL.len() + 1);
    for metric in Metric::ALL {
        for slot in Slot::ALL {
            let endpoint = config.grouped_endpoint(metric, slot);
            results.push(check_endpoint(source, endpoint, |body| validate_grouped(body, slot, metric)).await);
        }
    }
    results.push(check_endpoint(source, config.summary_endpoint(), validate_summary).await);
    results
}

pub async fn run_check<S: StatsSource>(source: &S, config: &DashboardConfig) -> anyhow::Result<()> {
    info!("Checking API endpoints at {}", config.api_base());
    let results = check_all(source, config).await;

    println!("Test Results:");
    for result in &results {
        println!("{}", result);
    }

    let failed = results.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{} of {} endpoints failed", failed, results.len());
    }
    info!("All {} endpoints passed", results.len());
    Ok(())
}
