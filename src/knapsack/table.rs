/// Flat record of the DP table: one bit per `(item, capacity)` cell.
///
/// Cell `(i, w)` is set when `best[i + 1][w] != best[i][w]`, i.e. taking
/// item `i` strictly improved on skipping it at budget `w`. That is the only
/// question backtracking asks of the value table, so the values themselves
/// never need to outlive the fill.
#[derive(Debug)]
pub struct SelectionTable {
    rows: usize,
    columns: usize,
    bits: Vec<u64>,
}

impl SelectionTable {
    /// `None` when `rows * columns` does not fit in `usize`.
    pub fn new(rows: usize, columns: usize) -> Option<Self> {
        let cells = rows.checked_mul(columns)?;
        Some(Self {
            rows,
            columns,
            bits: vec![0; cells.div_ceil(64)],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns);
        row * self.columns + column
    }

    pub fn mark(&mut self, row: usize, column: usize) {
        let idx = self.index(row, column);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    pub fn is_marked(&self, row: usize, column: usize) -> bool {
        let idx = self.index(row, column);
        self.bits[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    /// Walks from the last row back to the first, starting at `capacity`.
    ///
    /// Returns the chosen row indices in ascending order. `weight_of` must
    /// give the same scaled weight the fill used for each row.
    pub fn backtrack<F>(&self, capacity: usize, weight_of: F) -> Vec<usize>
    where
        F: Fn(usize) -> usize,
    {
        let mut remaining = capacity.min(self.columns.saturating_sub(1));
        let mut chosen = Vec::new();

        for row in (0..self.rows).rev() {
            if !self.is_marked(row, remaining) {
                continue;
            }
            chosen.push(row);
            // a marked cell only exists where the weight fit
            remaining -= weight_of(row);
        }

        chosen.reverse();
        chosen
    }
}
