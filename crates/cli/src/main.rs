//! Thin transport glue: JSON orders in, cleaned JSON lines out.
//!
//! Reads an input file given as the first argument (stdin when absent),
//! runs the transformation pipeline and prints the result. All logic lives
//! in the domain crates.

use std::io::Read;

use anyhow::Context;
use orderloom_sales::{InputOrder, transform_orders};

fn main() -> anyhow::Result<()> {
    orderloom_observability::init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read orders from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read orders from stdin")?;
            buf
        }
    };

    let orders: Vec<InputOrder> =
        serde_json::from_str(&raw).context("failed to parse input orders")?;
    tracing::info!(order_count = orders.len(), "transforming orders");

    let cleaned = transform_orders(&orders);
    let output = serde_json::to_string_pretty(&cleaned).context("failed to serialize output")?;
    println!("{output}");

    Ok(())
}
