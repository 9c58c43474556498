use std::fmt;

/// Which ceiling a solve ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `floor(capacity * scale)`, in table columns.
    ScaledCapacity,
    /// Selection bits plus value rows, in bytes.
    TableBytes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    InvalidCapacity(f64),
    InvalidItem { id: String, value: f64, weight: f64 },
    ResourceLimitExceeded { resource: Resource, requested: u64, limit: u64 },
    Cancelled,
}

impl SolveError {
    /// Input errors the caller can fix, as opposed to an interrupted solve.
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, SolveError::Cancelled)
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be finite and >= 0)", capacity)
            }
            SolveError::InvalidItem { id, value, weight } => write!(
                f,
                "Invalid order {}: value {} / weight {} (must be finite and >= 0)",
                id, value, weight
            ),
            SolveError::ResourceLimitExceeded {
                resource: Resource::ScaledCapacity,
                requested,
                limit,
            } => write!(
                f,
                "Scaled capacity {} exceeds the limit of {} units",
                requested, limit
            ),
            SolveError::ResourceLimitExceeded {
                resource: Resource::TableBytes,
                requested,
                limit,
            } => write!(
                f,
                "Table of {} bytes exceeds the limit of {} bytes",
                requested, limit
            ),
            SolveError::Cancelled => write!(f, "Calculation cancelled"),
        }
    }
}

impl std::error::Error for SolveError {}
