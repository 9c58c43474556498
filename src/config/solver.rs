use serde::{Deserialize, Serialize};

use crate::knapsack::{
    KnapsackSolver, ScaleFactor, DEFAULT_MAX_SCALED_CAPACITY, DEFAULT_MAX_TABLE_BYTES,
    VALUE_ROW_BYTES_PER_COLUMN,
};

/* =======================
SOLVER CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Units per euro when spending euros (buy).
    pub currency_scale: u64,
    /// Units per crypto when spending crypto (sell).
    pub asset_scale: u64,
    /// Largest `floor(budget * scale)` a single solve may allocate for.
    pub max_scaled_capacity: u64,
    /// Largest table (selection bits plus value rows) a single solve may allocate.
    pub max_table_bytes: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            currency_scale: ScaleFactor::CURRENCY.get(),
            asset_scale: ScaleFactor::ASSET.get(),
            max_scaled_capacity: DEFAULT_MAX_SCALED_CAPACITY,
            max_table_bytes: DEFAULT_MAX_TABLE_BYTES,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.currency_scale == 0 {
            anyhow::bail!("solver.currency_scale must be > 0");
        }
        if self.asset_scale == 0 {
            anyhow::bail!("solver.asset_scale must be > 0");
        }
        if self.max_scaled_capacity == 0 {
            anyhow::bail!("solver.max_scaled_capacity must be > 0");
        }

        // the value rows alone must fit, whatever the order count
        let rows_bytes = self
            .max_scaled_capacity
            .checked_add(1)
            .and_then(|columns| columns.checked_mul(VALUE_ROW_BYTES_PER_COLUMN));
        match rows_bytes {
            Some(bytes) if bytes <= self.max_table_bytes => Ok(()),
            _ => anyhow::bail!(
                "solver.max_scaled_capacity {} does not fit in solver.max_table_bytes {}",
                self.max_scaled_capacity,
                self.max_table_bytes
            ),
        }
    }

    /// Solver for spending euros on asks.
    pub fn buy_solver(&self) -> anyhow::Result<KnapsackSolver> {
        let scale = ScaleFactor::new(self.currency_scale)
            .ok_or_else(|| anyhow::anyhow!("solver.currency_scale must be > 0"))?;
        Ok(KnapsackSolver::new(scale, self.max_scaled_capacity)
            .with_max_table_bytes(self.max_table_bytes))
    }

    /// Solver for spending crypto on bids.
    pub fn sell_solver(&self) -> anyhow::Result<KnapsackSolver> {
        let scale = ScaleFactor::new(self.asset_scale)
            .ok_or_else(|| anyhow::anyhow!("solver.asset_scale must be > 0"))?;
        Ok(KnapsackSolver::new(scale, self.max_scaled_capacity)
            .with_max_table_bytes(self.max_table_bytes))
    }
}

/* =======================
SERVER CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Wall-clock budget for one request's buy + sell solve.
    pub solve_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            solve_timeout_ms: 10_000,
        }
    }
}
