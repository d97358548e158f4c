//! # Loja Demo
//!
//! Seeds the sample catalogue, places one order and prints the order report.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging   tracing-subscriber, RUST_LOG (default: info)  │
//! │  2. Load Configuration   LOJA_DISCOUNT / LOJA_OUTPUT / ...            │
//! │  3. Seed Catalogue       3 products, 1 customer                        │
//! │  4. Create Order         OrderService::create_order                    │
//! │  5. Print Report         text blocks or JSON on stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod seed;

use std::sync::Arc;

use loja_core::SystemClock;
use loja_orders::{render_json, render_text, ActivityLog, ConsoleLog, OrderService, TracingLog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ActivitySink, DemoConfig, OutputFormat};
use crate::seed::Seed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        discount = %config.discount,
        output = ?config.output,
        activity_log = ?config.activity_log,
        "Configuration loaded"
    );

    let log: Arc<dyn ActivityLog> = match config.activity_log {
        ActivitySink::Console => Arc::new(ConsoleLog),
        ActivitySink::Tracing => Arc::new(TracingLog),
    };
    let service = OrderService::in_memory_with(Arc::new(SystemClock), log);

    let seed = Seed::load()?;
    let strategy = config.discount.strategy();
    service.create_order(
        Arc::clone(&seed.customer),
        seed.sample_lines()?,
        strategy.as_ref(),
    )?;

    let reports = service.list_orders()?;
    let rendered = match config.output {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => render_json(&reports)? + "\n",
    };
    print!("{rendered}");

    Ok(())
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
