/// Fixed-point granularity used to turn a continuous budget into integer
/// table columns.
///
/// [`ScaleFactor::discretize`] is the only place a float quantity becomes a
/// table index. The fill and the backtrack both go through it, so an item
/// always occupies the same number of columns in both passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactor(u64);

impl ScaleFactor {
    /// Euro cent precision.
    pub const CURRENCY: ScaleFactor = ScaleFactor(100);
    /// Micro-unit precision for crypto quantities.
    pub const ASSET: ScaleFactor = ScaleFactor(1_000_000);

    pub fn new(factor: u64) -> Option<Self> {
        (factor > 0).then_some(Self(factor))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Decimal places the factor resolves: 2 for 100, 6 for 1_000_000.
    pub fn decimals(self) -> u32 {
        let mut digits = 0;
        let mut step = 1u64;
        while step < self.0 {
            step = step.saturating_mul(10);
            digits += 1;
        }
        digits
    }

    /// `floor(quantity * factor)`.
    ///
    /// Truncates, never rounds: a quantity just below a unit boundary needs
    /// one unit less. Callers validate `quantity` (finite, non-negative)
    /// first; out-of-range results saturate to `u64::MAX`.
    pub fn discretize(self, quantity: f64) -> u64 {
        (quantity * self.0 as f64).floor() as u64
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::CURRENCY
    }
}
