use serde::{Deserialize, Serialize};

pub mod order;

pub use order::{Order, Side};

// ==================================================
// EXCHANGE SNAPSHOT (INPUT)
// ==================================================

/// Everything needed to evaluate one exchange: the funds at our disposal and
/// the order book to trade against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExchangeSnapshot {
    #[serde(alias = "id")]
    pub id: String,
    #[serde(alias = "availableFunds")]
    pub available_funds: UserFunds,
    #[serde(alias = "orderBook")]
    pub order_book: OrderBook,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserFunds {
    /// Crypto that can be sold.
    #[serde(alias = "crypto")]
    pub crypto: f64,
    /// Euros that can be spent on crypto.
    #[serde(alias = "euro")]
    pub euro: f64,
}

// ==================================================
// ORDER BOOK
// ==================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrderBook {
    /// Offers to buy crypto from us.
    #[serde(alias = "bids")]
    pub bids: Vec<OrderBookEntry>,
    /// Offers to sell crypto to us.
    #[serde(alias = "asks")]
    pub asks: Vec<OrderBookEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrderBookEntry {
    #[serde(alias = "order")]
    pub order: Order,
}

impl OrderBook {
    pub fn ask_orders(&self) -> Vec<Order> {
        self.asks.iter().map(|e| e.order.clone()).collect()
    }

    pub fn bid_orders(&self) -> Vec<Order> {
        self.bids.iter().map(|e| e.order.clone()).collect()
    }
}

impl From<Order> for OrderBookEntry {
    fn from(order: Order) -> Self {
        Self { order }
    }
}

// ==================================================
// RESULTS
// ==================================================

/// Best achievable value and the orders that achieve it, in order-book order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestValueResult {
    pub value: f64,
    pub order_ids: Vec<String>,
}

impl BestValueResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Buy and sell results for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeReport {
    pub exchange_id: String,
    pub funds: UserFunds,
    pub buy: BestValueResult,
    pub sell: BestValueResult,
}

// ==================================================
// RESPONSE (OUTPUT WIRE FORMAT)
// ==================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestValueResponse {
    pub exchange_id: String,
    pub buy_result: BuyResult,
    pub sell_result: SellResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyResult {
    pub cryptos: f64,
    pub order_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellResult {
    pub euros: f64,
    pub order_ids: Vec<String>,
}

impl From<ExchangeReport> for BestValueResponse {
    fn from(report: ExchangeReport) -> Self {
        Self {
            exchange_id: report.exchange_id,
            buy_result: BuyResult {
                cryptos: report.buy.value,
                order_ids: report.buy.order_ids,
            },
            sell_result: SellResult {
                euros: report.sell.value,
                order_ids: report.sell.order_ids,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "Id": "exchange-01",
        "AvailableFunds": { "Crypto": 6, "Euro": 110 },
        "OrderBook": {
            "Bids": [
                { "Order": { "Id": "b1", "Type": "Buy", "Kind": "Limit", "Amount": 0.5, "Price": 100 } }
            ],
            "Asks": [
                { "Order": { "Id": "a1", "Type": "Sell", "Kind": "Limit", "Amount": 0.1, "Price": 50.5 } },
                { "Order": { "Id": "a2", "Type": "Sell", "Kind": "Limit", "Amount": 0.15, "Price": 55.03 } }
            ]
        }
    }"#;

    #[test]
    fn snapshot_decodes_pascal_case() {
        let snapshot: ExchangeSnapshot = serde_json::from_str(SNAPSHOT).unwrap();

        assert_eq!(snapshot.id, "exchange-01");
        assert_eq!(snapshot.available_funds.crypto, 6.0);
        assert_eq!(snapshot.available_funds.euro, 110.0);
        assert_eq!(snapshot.order_book.bids.len(), 1);

        let asks = snapshot.order_book.ask_orders();
        assert_eq!(asks.len(), 2);
        assert_eq!(asks[1].id, "a2");
    }

    #[test]
    fn empty_snapshot_defaults() {
        let snapshot: ExchangeSnapshot = serde_json::from_str("{}").unwrap();

        assert!(snapshot.id.is_empty());
        assert!(snapshot.order_book.asks.is_empty());
        assert!(snapshot.order_book.bids.is_empty());
        assert_eq!(snapshot.available_funds.euro, 0.0);
    }

    #[test]
    fn response_uses_camel_case() {
        let report = ExchangeReport {
            exchange_id: "x".to_string(),
            funds: UserFunds::default(),
            buy: BestValueResult {
                value: 0.25,
                order_ids: vec!["1".to_string()],
            },
            sell: BestValueResult::empty(),
        };

        let json = serde_json::to_value(BestValueResponse::from(report)).unwrap();

        assert_eq!(json["exchangeId"], "x");
        assert_eq!(json["buyResult"]["cryptos"], 0.25);
        assert_eq!(json["buyResult"]["orderIds"][0], "1");
        assert_eq!(json["sellResult"]["euros"], 0.0);
    }
}
