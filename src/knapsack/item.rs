use crate::domain::Order;

use super::errors::SolveError;

/// Which way the exchange goes. Decides how an order projects onto an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Spend euros on asks: value = amount, weight = price.
    AcquireAsset,
    /// Spend crypto on bids: value = price, weight = amount.
    AcquireCurrency,
}

impl Mode {
    pub fn project(self, order: &Order) -> Item {
        let (value, weight) = match self {
            Mode::AcquireAsset => (order.amount, order.price),
            Mode::AcquireCurrency => (order.price, order.amount),
        };

        Item {
            id: order.id.clone(),
            value,
            weight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::AcquireAsset => "buy",
            Mode::AcquireCurrency => "sell",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            value,
            weight,
        }
    }

    /// Zero is allowed on either side; negative or non-finite is not.
    pub fn validate(&self) -> Result<(), SolveError> {
        let ok = |x: f64| x.is_finite() && x >= 0.0;
        if ok(self.value) && ok(self.weight) {
            Ok(())
        } else {
            Err(SolveError::InvalidItem {
                id: self.id.clone(),
                value: self.value,
                weight: self.weight,
            })
        }
    }
}

/// Projects every order, keeping input order. Nothing is dropped or clamped.
pub fn map_orders<'a, I>(mode: Mode, orders: I) -> Vec<Item>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().map(|o| mode.project(o)).collect()
}
