use colored::Colorize;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::domain::{BestValueResponse, ExchangeReport};

/// Rounds a float to `decimals` places for display, dropping float noise
/// such as `0.30000000000000004`.
pub fn display_amount(value: f64, decimals: u32) -> String {
    match Decimal::from_f64(value) {
        Some(d) => d.round_dp(decimals).normalize().to_string(),
        None => value.to_string(),
    }
}

/// Text report in the console layout:
///
/// ```text
/// Buy and sell results for exchange-01.json:
/// - Buy
///    - Available euros: 110
///    - Cryptos to gain: 0.25
///    - Ask orders to use: 1, 2
/// - Sell
///    ...
/// ```
pub fn render_text(input: &str, report: &ExchangeReport, decimals: (u32, u32)) -> String {
    let (crypto_dp, euro_dp) = decimals;
    let mut out = String::new();

    out.push_str(&format!("Buy and sell results for {}:\n", input.bold()));

    out.push_str(&format!("{}\n", "- Buy".green().bold()));
    out.push_str(&format!(
        "   - Available euros: {}\n",
        display_amount(report.funds.euro, euro_dp)
    ));
    out.push_str(&format!(
        "   - Cryptos to gain: {}\n",
        display_amount(report.buy.value, crypto_dp).cyan()
    ));
    out.push_str(&format!(
        "   - Ask orders to use: {}\n",
        report.buy.order_ids.join(", ")
    ));

    out.push_str(&format!("{}\n", "- Sell".red().bold()));
    out.push_str(&format!(
        "   - Available cryptos: {}\n",
        display_amount(report.funds.crypto, crypto_dp)
    ));
    out.push_str(&format!(
        "   - Euros to gain: {}\n",
        display_amount(report.sell.value, euro_dp).cyan()
    ));
    out.push_str(&format!(
        "   - Bid orders to use: {}\n",
        report.sell.order_ids.join(", ")
    ));

    out
}

pub fn render_json(report: &ExchangeReport) -> anyhow::Result<String> {
    let response = BestValueResponse::from(report.clone());
    Ok(serde_json::to_string_pretty(&response)?)
}
