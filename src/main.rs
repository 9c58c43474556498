use best_value::*;

use anyhow::Result;
use clap::Parser;
use client::SnapshotClient;
use config::{Args, Command, Config};
use log::info;
use logging::{log_rejection, log_report, log_success};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let calculator = BestValueCalculator::new(&config.solver)?;

    info!(
        "⚙️ Scales: buy x{} / sell x{}, table limit {} units / {} bytes",
        config.solver.currency_scale,
        config.solver.asset_scale,
        config.solver.max_scaled_capacity,
        config.solver.max_table_bytes
    );

    match args.command {
        Command::Calc { input, json } => run_calc(&calculator, &input, json).await,
        Command::Serve { bind } => {
            let mut server_config = config.server.clone();
            if let Some(bind) = bind {
                server_config.bind = bind;
            }
            server::serve(&server_config, calculator).await
        }
    }
}

// ===============================
// CALC
// ===============================
async fn run_calc(calculator: &BestValueCalculator, input: &str, json: bool) -> Result<()> {
    let snapshot = SnapshotClient::new()?.load(input).await?;

    let report = match calculator.evaluate(&snapshot) {
        Ok(report) => report,
        Err(e) => {
            log_rejection(&e);
            anyhow::bail!("{}: {}", input, e);
        }
    };
    log_report(&report);

    if json {
        println!("{}", report::render_json(&report)?);
    } else {
        print!(
            "{}",
            report::render_text(input, &report, calculator.value_decimals())
        );
    }

    log_success("Calculation complete");
    Ok(())
}
