//! Demo binary: generates the configured dataset and emits it as JSON,
//! standing in for the grid display layer that normally consumes the
//! tables. Mirrors the original demo's preview mode, logging a short
//! summary of what was generated.

use demogen::{
    config::{self, Dataset},
    core::{finance, sales},
    errors::Result,
};
use dotenvy::dotenv;
use std::{env, fs};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();

    // 3. Load the run configuration; the path can be overridden via env
    let config_path = env::var("DEMOGEN_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load_config_or_default(&config_path)?;
    info!(?config, "Loaded demo configuration");

    // 4. Generate the requested table
    let json = match config.dataset {
        Dataset::Sales => {
            let records = sales::generate_sample_data(config.records)?;
            log_sales_summary(&records);
            serde_json::to_string_pretty(&records)?
        }
        Dataset::Aggregation => {
            let records = sales::get_aggregation_demo_data()?;
            log_sales_summary(&records);
            serde_json::to_string_pretty(&records)?
        }
        Dataset::Finance => {
            let records = finance::generate_finance_data(config.records);
            info!(records = records.len(), "Generated market snapshots");
            serde_json::to_string_pretty(&records)?
        }
    };

    // 5. Emit to the configured sink
    match config.output {
        Some(path) => {
            fs::write(&path, &json)?;
            info!(path = %path.display(), bytes = json.len(), "Wrote dataset");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn log_sales_summary(records: &[demogen::models::SalesRecord]) {
    let revenue: f64 = records.iter().map(|r| r.total_amount).sum();
    let mean = if records.is_empty() {
        0.0
    } else {
        revenue / records.len() as f64
    };
    info!(
        records = records.len(),
        total_revenue = format_args!("{revenue:.2}"),
        mean_sale = format_args!("{mean:.2}"),
        "Generated sales records"
    );
}
