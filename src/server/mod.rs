//! HTTP front end: `POST /best-value` evaluates a snapshot, `GET /health`
//! reports liveness.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::calculator::BestValueCalculator;
use crate::config::ServerConfig;
use crate::domain::{BestValueResponse, ExchangeSnapshot};
use crate::knapsack::SolveError;
use crate::logging::{log_rejection, log_report};

#[derive(Clone)]
pub struct AppState {
    calculator: Arc<BestValueCalculator>,
    solve_timeout: Duration,
}

impl AppState {
    pub fn new(calculator: BestValueCalculator, solve_timeout: Duration) -> Self {
        Self {
            calculator: Arc::new(calculator),
            solve_timeout,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unavailable(String),
    Internal(String),
}

impl From<SolveError> for ApiError {
    fn from(err: SolveError) -> Self {
        if err.is_bad_input() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Unavailable(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Unavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Raises the solve's cancel flag when dropped, so a request that ends early
/// for any reason (timeout, client gone, outer layer) stops its blocking task.
struct CancelOnDrop(Arc<AtomicBool>);

impl CancelOnDrop {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    fn flag(&self) -> Arc<AtomicBool> {
        self.0.clone()
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/best-value", post(best_value))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds `config.bind` and serves until the process stops.
pub async fn serve(config: &ServerConfig, calculator: BestValueCalculator) -> anyhow::Result<()> {
    let state = AppState::new(calculator, Duration::from_millis(config.solve_timeout_ms));
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", config.bind, e))?;

    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn best_value(
    State(state): State<AppState>,
    Json(snapshot): Json<ExchangeSnapshot>,
) -> Result<Json<BestValueResponse>, ApiError> {
    let guard = CancelOnDrop::new();

    let handle = tokio::task::spawn_blocking({
        let calculator = state.calculator.clone();
        let cancel = guard.flag();
        move || calculator.evaluate_with_cancel(&snapshot, &cancel)
    });

    let outcome = match tokio::time::timeout(state.solve_timeout, handle).await {
        Ok(joined) => joined.map_err(|e| {
            error!("solve task failed: {}", e);
            ApiError::Internal("calculation failed".to_string())
        })?,
        // dropping the guard stops the blocking task on its next row
        Err(_) => Err(SolveError::Cancelled),
    };

    match outcome {
        Ok(report) => {
            log_report(&report);
            Ok(Json(BestValueResponse::from(report)))
        }
        Err(err) => {
            log_rejection(&err);
            Err(err.into())
        }
    }
}
