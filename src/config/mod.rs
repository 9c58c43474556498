use clap::{Parser, Subcommand};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub mod solver;

pub use solver::{ServerConfig, SolverConfig};

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(name = "best-value", author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "best-value.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the best buy and sell results for an exchange snapshot
    Calc {
        /// Path to a JSON snapshot, or an http(s) URL serving one
        input: String,

        /// Print the JSON response instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Serve POST /best-value over HTTP
    Serve {
        /// Address to bind, overrides the config file and BEST_VALUE_BIND
        #[arg(short, long)]
        bind: Option<String>,
    },
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub server: ServerConfig,
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let mut cfg = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            info!("📝 Wrote default config to {}", path.display());
            cfg
        };

        cfg.apply_env();
        cfg.solver.validate()?;
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(limit) = Self::max_scaled_capacity() {
            self.solver.max_scaled_capacity = limit;
        }
        if let Some(limit) = Self::max_table_bytes() {
            self.solver.max_table_bytes = limit;
        }
        if let Some(timeout) = Self::solve_timeout_ms() {
            self.server.solve_timeout_ms = timeout;
        }
        if let Some(bind) = Self::bind_address() {
            self.server.bind = bind;
        }
    }
}

// ==================================================
// ENVIRONMENT HELPERS
// ==================================================

impl Config {
    /// Override for the solver's table ceiling
    pub fn max_scaled_capacity() -> Option<u64> {
        env::var("BEST_VALUE_MAX_SCALED_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
    }

    /// Override for the solver's memory ceiling
    pub fn max_table_bytes() -> Option<u64> {
        env::var("BEST_VALUE_MAX_TABLE_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
    }

    /// Override for the per-request solve timeout
    pub fn solve_timeout_ms() -> Option<u64> {
        env::var("BEST_VALUE_SOLVE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
    }

    pub fn bind_address() -> Option<String> {
        env::var("BEST_VALUE_BIND").ok().filter(|v| !v.is_empty())
    }
}
