pub mod calculator;
pub mod client;
pub mod config;
pub mod domain;
pub mod knapsack;
pub mod logging;
pub mod report;
pub mod server;

pub use calculator::BestValueCalculator;
pub use domain::{BestValueResult, ExchangeReport, ExchangeSnapshot, Order};
pub use knapsack::{KnapsackSolver, Mode, ScaleFactor, SolveError};
