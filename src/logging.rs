use log::{error, info, warn};

use crate::domain::ExchangeReport;
use crate::knapsack::SolveError;

pub fn log_rejection(reason: &SolveError) {
    if reason.is_bad_input() {
        warn!("❌ Rejected: {}", reason);
    } else {
        error!("⏱️ Aborted: {}", reason);
    }
}

pub fn log_report(report: &ExchangeReport) {
    info!(
        "📊 Exchange {} — buy {} crypto ({} asks), sell {} euros ({} bids)",
        report.exchange_id,
        report.buy.value,
        report.buy.order_ids.len(),
        report.sell.value,
        report.sell.order_ids.len()
    );
}

pub fn log_success(msg: &str) {
    info!("✅ {}", msg);
}
