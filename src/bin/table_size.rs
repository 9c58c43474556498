use best_value::*;

use anyhow::Result;
use client::SnapshotClient;
use config::Config;
use knapsack::KnapsackSolver;
use std::path::PathBuf;

fn describe(side: &str, solver: &KnapsackSolver, budget: f64, orders: usize) {
    println!("--- {} ---", side);
    println!("Budget: {} (scale x{})", budget, solver.scale().get());
    println!("Orders: {}", orders);

    match solver.estimate(budget, orders) {
        Ok(plan) => {
            println!("Scaled capacity: {} units", plan.scaled_capacity);
            println!(
                "Table: {} x {} = {} cells",
                plan.rows,
                plan.columns,
                plan.cells()
            );
            println!("Memory: ~{:.1} MiB", plan.bytes as f64 / (1024.0 * 1024.0));
            println!(
                "Uses {:.1}% of the {} unit limit",
                100.0 * plan.scaled_capacity as f64 / solver.max_scaled_capacity() as f64,
                solver.max_scaled_capacity()
            );
            println!(
                "Uses {:.1}% of the {} byte limit\n",
                100.0 * plan.bytes as f64 / solver.max_table_bytes() as f64,
                solver.max_table_bytes()
            );
        }
        Err(e) => println!("❌ {}\n", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        anyhow::bail!("Usage: cargo run --bin table_size <SNAPSHOT> [CONFIG]");
    };
    let config_path = args.next().unwrap_or_else(|| "best-value.json".to_string());

    let config = Config::load(&PathBuf::from(config_path))?;
    let snapshot = SnapshotClient::new()?.load(&input).await?;

    println!("\n=== TABLE SIZE FOR {} ===\n", input);

    let funds = &snapshot.available_funds;
    describe(
        "Buy (euros -> crypto)",
        &config.solver.buy_solver()?,
        funds.euro,
        snapshot.order_book.asks.len(),
    );
    describe(
        "Sell (crypto -> euros)",
        &config.solver.sell_solver()?,
        funds.crypto,
        snapshot.order_book.bids.len(),
    );

    Ok(())
}
