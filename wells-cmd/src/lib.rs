//! Command implementations for the wells CLI.
//!
//! Provides subcommands for validating the dashboard's API endpoints and for
//! previewing the Chart.js configurations and summary the dashboard would show.

use clap::{Args, Subcommand};
use wells_core::{DashboardConfig, Metric, Slot};

pub mod check;
pub mod preview;
pub mod source;

#[cfg(test)]
mod testing;

/// Backend location and formatting shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Base URL of the dashboard backend
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Locale used for number formatting (e.g. en, de, fr)
    #[arg(long, global = true, default_value = wells_core::config::DEFAULT_LOCALE)]
    pub locale: String,
}

impl Target {
    pub fn config(&self) -> DashboardConfig {
        DashboardConfig::new(self.base_url.as_str(), self.locale.as_str())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Check every grouped endpoint and the summary endpoint
    Check,

    /// Print the Chart.js configuration for one slot, or all four
    Chart {
        /// Metric to chart (days or cost)
        #[arg(short = 'm', long, default_value = "days")]
        metric: Metric,

        /// Only this slot (year, era, region, well-type)
        #[arg(short = 's', long)]
        slot: Option<Slot>,
    },

    /// Print the summary subtitle for a metric
    Summary {
        /// Metric for the average (days or cost)
        #[arg(short = 'm', long, default_value = "days")]
        metric: Metric,
    },
}

pub async fn run(target: Target, command: Command) -> anyhow::Result<()> {
    let config = target.config();
    let source = source::HttpSource::new();
    match command {
        Command::Check => check::run_check(&source, &config).await,
        Command::Chart { metric, slot } => preview::run_chart(&source, &config, metric, slot).await,
        Command::Summary { metric } => preview::run_summary(&source, &config, metric).await,
    }
}
