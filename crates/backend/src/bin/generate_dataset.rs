//! Generates `raw_sales_data.csv` for the sales dashboard.
//!
//! No flags: record count, output path and seed come from configuration.

use backend::shared::config;
use backend::shared::format::format_number;
use backend::system;
use backend::usecases::u501_generate_dataset::{executor, GenerateRequest};
use chrono::Local;

fn main() -> anyhow::Result<()> {
    system::tracing::initialize("generate_dataset")?;

    let app_config = config::load_config()?;
    let request = GenerateRequest::from_config(&app_config);

    tracing::info!(
        "Starting the generation of {} sales records...",
        format_number(request.record_count)
    );

    let summary = executor::run(&request, Local::now().naive_local())?;

    tracing::info!(
        "Success! {} rows ({} of {} pooled customers, {} .. {}) saved to: {}",
        format_number(summary.rows_written),
        summary.distinct_customers,
        summary.customer_pool_size,
        summary.window_start,
        summary.window_end,
        summary.output_path.display()
    );

    Ok(())
}
