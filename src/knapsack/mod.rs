//! 0/1 knapsack over order-book offers.
//!
//! Orders are projected to `(value, weight)` items, the budget and weights
//! are discretized by a [`ScaleFactor`], the value table is filled row by row
//! and then backtracked to recover which orders produced the best value.

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::BestValueResult;

pub mod errors;
pub mod item;
pub mod scale;
pub mod table;

pub use errors::{Resource, SolveError};
pub use item::{map_orders, Item, Mode};
pub use scale::ScaleFactor;
pub use table::SelectionTable;

/// Default ceiling on `floor(capacity * scale)`.
pub const DEFAULT_MAX_SCALED_CAPACITY: u64 = 10_000_000;

/// Default ceiling on the memory one solve may allocate (1 GiB).
pub const DEFAULT_MAX_TABLE_BYTES: u64 = 1 << 30;

/// Bytes per table column held by the two live value rows.
pub const VALUE_ROW_BYTES_PER_COLUMN: u64 = 2 * std::mem::size_of::<f64>() as u64;

/// Size of the work a solve would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEstimate {
    pub scaled_capacity: u64,
    pub rows: usize,
    pub columns: usize,
    /// Selection bits plus the two live value rows.
    pub bytes: u64,
}

impl TableEstimate {
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

/// Memory for a `rows x columns` solve, or `None` if it does not fit in a `u64`.
pub fn table_bytes(rows: usize, columns: usize) -> Option<u64> {
    let cells = rows.checked_mul(columns)?;
    let bits = u64::try_from(cells.div_ceil(64)).ok()?.checked_mul(8)?;
    let values = u64::try_from(columns)
        .ok()?
        .checked_mul(VALUE_ROW_BYTES_PER_COLUMN)?;
    bits.checked_add(values)
}

#[derive(Debug, Clone, Copy)]
pub struct KnapsackSolver {
    scale: ScaleFactor,
    max_scaled_capacity: u64,
    max_table_bytes: u64,
}

impl KnapsackSolver {
    pub fn new(scale: ScaleFactor, max_scaled_capacity: u64) -> Self {
        Self {
            scale,
            max_scaled_capacity,
            max_table_bytes: DEFAULT_MAX_TABLE_BYTES,
        }
    }

    pub fn with_max_table_bytes(mut self, max_table_bytes: u64) -> Self {
        self.max_table_bytes = max_table_bytes;
        self
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn max_scaled_capacity(&self) -> u64 {
        self.max_scaled_capacity
    }

    pub fn max_table_bytes(&self) -> u64 {
        self.max_table_bytes
    }

    /// Checks `capacity` against both ceilings and sizes the table a solve
    /// over `rows` items would allocate. Nothing is allocated here.
    pub fn estimate(&self, capacity: f64, rows: usize) -> Result<TableEstimate, SolveError> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(SolveError::InvalidCapacity(capacity));
        }

        let scaled_capacity = self.scale.discretize(capacity);
        let too_wide = SolveError::ResourceLimitExceeded {
            resource: Resource::ScaledCapacity,
            requested: scaled_capacity,
            limit: self.max_scaled_capacity,
        };
        if scaled_capacity > self.max_scaled_capacity {
            return Err(too_wide);
        }

        let columns = usize::try_from(scaled_capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or(too_wide)?;

        let bytes = table_bytes(rows, columns).unwrap_or(u64::MAX);
        if bytes > self.max_table_bytes {
            return Err(SolveError::ResourceLimitExceeded {
                resource: Resource::TableBytes,
                requested: bytes,
                limit: self.max_table_bytes,
            });
        }

        Ok(TableEstimate {
            scaled_capacity,
            rows,
            columns,
            bytes,
        })
    }

    pub fn solve(&self, capacity: f64, items: &[Item]) -> Result<BestValueResult, SolveError> {
        self.solve_with_cancel(capacity, items, &AtomicBool::new(false))
    }

    /// Like [`solve`](Self::solve), but gives up with [`SolveError::Cancelled`]
    /// once `cancel` is set. The flag is polled once per item row.
    pub fn solve_with_cancel(
        &self,
        capacity: f64,
        items: &[Item],
        cancel: &AtomicBool,
    ) -> Result<BestValueResult, SolveError> {
        let plan = self.estimate(capacity, items.len())?;
        for item in items {
            item.validate()?;
        }

        if items.is_empty() {
            return Ok(BestValueResult::empty());
        }

        let columns = plan.columns;
        let mut table = SelectionTable::new(plan.rows, columns).ok_or(
            SolveError::ResourceLimitExceeded {
                resource: Resource::TableBytes,
                requested: plan.bytes,
                limit: self.max_table_bytes,
            },
        )?;

        debug!(
            "knapsack: {} items x {} columns (scale {})",
            items.len(),
            columns,
            self.scale.get()
        );

        // best[i][..] and best[i + 1][..]
        let mut prev = vec![0.0_f64; columns];
        let mut next = vec![0.0_f64; columns];

        for (row, item) in items.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                return Err(SolveError::Cancelled);
            }

            let weight = self.scaled_weight(item);
            let fits_from = weight.min(columns);
            next[..fits_from].copy_from_slice(&prev[..fits_from]);

            for w in fits_from..columns {
                let skip = prev[w];
                let take = prev[w - weight] + item.value;
                if take > skip {
                    next[w] = take;
                    table.mark(row, w);
                } else {
                    next[w] = skip;
                }
            }

            std::mem::swap(&mut prev, &mut next);
        }

        let value = prev[columns - 1];
        let order_ids = table
            .backtrack(columns - 1, |row| self.scaled_weight(&items[row]))
            .into_iter()
            .map(|row| items[row].id.clone())
            .collect();

        Ok(BestValueResult { value, order_ids })
    }

    fn scaled_weight(&self, item: &Item) -> usize {
        usize::try_from(self.scale.discretize(item.weight)).unwrap_or(usize::MAX)
    }
}
