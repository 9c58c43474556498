use crate::config::SolverConfig;
use crate::domain::*;
use crate::knapsack::{map_orders, KnapsackSolver, Mode, SolveError};
use log::info;
use std::sync::atomic::AtomicBool;

/// Works out the most crypto a euro budget buys from the asks, and the most
/// euros a crypto budget fetches from the bids.
#[derive(Debug, Clone)]
pub struct BestValueCalculator {
    buy_solver: KnapsackSolver,
    sell_solver: KnapsackSolver,
}

impl BestValueCalculator {
    pub fn new(config: &SolverConfig) -> anyhow::Result<Self> {
        Ok(Self {
            buy_solver: config.buy_solver()?,
            sell_solver: config.sell_solver()?,
        })
    }

    /// Decimal places worth reporting for (crypto gained, euros gained).
    ///
    /// Crypto is resolved at the sell side's scale and euros at the buy
    /// side's, since those are the units each quantity is budgeted in.
    pub fn value_decimals(&self) -> (u32, u32) {
        (
            self.sell_solver.scale().decimals(),
            self.buy_solver.scale().decimals(),
        )
    }

    /// Highest crypto amount `available_euros` can buy from `asks`.
    pub fn buy(&self, available_euros: f64, asks: &[Order]) -> Result<BestValueResult, SolveError> {
        self.run(Mode::AcquireAsset, available_euros, asks, &AtomicBool::new(false))
    }

    /// Highest euro amount `available_cryptos` can fetch from `bids`.
    pub fn sell(&self, available_cryptos: f64, bids: &[Order]) -> Result<BestValueResult, SolveError> {
        self.run(Mode::AcquireCurrency, available_cryptos, bids, &AtomicBool::new(false))
    }

    pub fn evaluate(&self, snapshot: &ExchangeSnapshot) -> Result<ExchangeReport, SolveError> {
        self.evaluate_with_cancel(snapshot, &AtomicBool::new(false))
    }

    /// Runs buy then sell. `cancel` is shared by both solves.
    pub fn evaluate_with_cancel(
        &self,
        snapshot: &ExchangeSnapshot,
        cancel: &AtomicBool,
    ) -> Result<ExchangeReport, SolveError> {
        let funds = &snapshot.available_funds;

        let buy = self.run(
            Mode::AcquireAsset,
            funds.euro,
            &snapshot.order_book.ask_orders(),
            cancel,
        )?;
        let sell = self.run(
            Mode::AcquireCurrency,
            funds.crypto,
            &snapshot.order_book.bid_orders(),
            cancel,
        )?;

        Ok(ExchangeReport {
            exchange_id: snapshot.id.clone(),
            funds: funds.clone(),
            buy,
            sell,
        })
    }

    fn run(
        &self,
        mode: Mode,
        budget: f64,
        orders: &[Order],
        cancel: &AtomicBool,
    ) -> Result<BestValueResult, SolveError> {
        let solver = match mode {
            Mode::AcquireAsset => &self.buy_solver,
            Mode::AcquireCurrency => &self.sell_solver,
        };

        let items = map_orders(mode, orders);
        let result = solver.solve_with_cancel(budget, &items, cancel)?;

        info!(
            "🎯 {}: budget {} over {} orders -> {} using {} order(s)",
            mode.as_str(),
            budget,
            orders.len(),
            result.value,
            result.order_ids.len()
        );

        Ok(result)
    }
}
