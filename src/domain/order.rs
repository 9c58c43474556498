use serde::{Deserialize, Serialize};

/// An offer to buy or sell crypto, as listed in the order book.
///
/// Only `id`, `amount` and `price` take part in the calculation; the side is
/// decided by the list the order sits in, not by `order_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Order {
    #[serde(alias = "id")]
    pub id: String,
    #[serde(alias = "time")]
    pub time: String,
    #[serde(rename = "Type", alias = "type")]
    pub order_type: String,
    #[serde(alias = "kind")]
    pub kind: String,
    /// Crypto quantity the order trades.
    #[serde(alias = "amount")]
    pub amount: f64,
    /// Euros paid or asked for `amount`.
    #[serde(alias = "price")]
    pub price: f64,
}

impl Order {
    pub fn new(id: impl Into<String>, side: Side, amount: f64, price: f64) -> Self {
        Self {
            id: id.into(),
            time: String::new(),
            order_type: side.as_str().to_string(),
            kind: "Limit".to_string(),
            amount,
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_accepts_pascal_and_camel_case() {
        let pascal: Order = serde_json::from_str(
            r#"{"Id":"1","Time":"2024-03-01T14:41:06.563Z","Type":"Sell","Kind":"Limit","Amount":0.1,"Price":50.5}"#,
        )
        .unwrap();
        let camel: Order = serde_json::from_str(
            r#"{"id":"1","time":"2024-03-01T14:41:06.563Z","type":"Sell","kind":"Limit","amount":0.1,"price":50.5}"#,
        )
        .unwrap();

        assert_eq!(pascal, camel);
        assert_eq!(pascal.order_type, "Sell");
        assert!((pascal.price - 50.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_default() {
        let order: Order = serde_json::from_str(r#"{"Id":"x"}"#).unwrap();
        assert_eq!(order.id, "x");
        assert_eq!(order.amount, 0.0);
        assert!(order.kind.is_empty());
    }
}
