//! Summary subtitle: total well count and the active metric's overall average.

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::format::NumberFormat;
use crate::metric::Metric;
use crate::models::SummaryStats;
use crate::refresh::StatsSource;

/// `Total wells: 1,500 | Average days per 1000m: 5.7`
pub fn subtitle(stats: &SummaryStats, metric: Metric, numbers: &NumberFormat) -> String {
    let average = numbers.one_decimal(stats.average(metric));
    let average = match metric {
        Metric::Days => average,
        Metric::Cost => format!("${average}"),
    };
    format!(
        "Total wells: {} | Average {}: {}",
        numbers.integer(stats.total_wells),
        metric.unit_label().to_lowercase(),
        average
    )
}

/// Fetch `/api/summary_stats` and format the subtitle for `metric`.
pub async fn load_subtitle<S: StatsSource>(
    source: &S,
    config: &DashboardConfig,
    metric: Metric,
) -> Result<String> {
    let body = source.fetch_json(&config.summary_endpoint()).await?;
    let stats = SummaryStats::from_json(&body)?;
    Ok(subtitle(&stats, metric, &config.numbers()))
}
