use best_value::config::SolverConfig;
use best_value::domain::{Order, Side};
use best_value::{BestValueCalculator, BestValueResult};

fn calculator() -> BestValueCalculator {
    BestValueCalculator::new(&SolverConfig::default()).expect("default config")
}

fn ask(id: &str, amount: f64, price: f64) -> Order {
    Order::new(id, Side::Sell, amount, price)
}

fn bid(id: &str, amount: f64, price: f64) -> Order {
    Order::new(id, Side::Buy, amount, price)
}

fn assert_result(actual: &BestValueResult, value: f64, ids: &[&str]) {
    assert!(
        (actual.value - value).abs() < 1e-9,
        "expected value {}, got {}",
        value,
        actual.value
    );
    assert_eq!(actual.order_ids, ids);
}

// --- buy ---

#[test]
fn buy_picks_the_two_larger_asks() {
    let asks = vec![ask("1", 0.1, 50.5), ask("2", 0.15, 55.03), ask("3", 0.01, 40.1)];

    let result = calculator().buy(110.0, &asks).unwrap();

    assert_result(&result, 0.25, &["1", "2"]);
}

#[test]
fn buy_below_capacity_limit_keeps_first_ask() {
    let asks = vec![ask("1", 0.1, 57.0), ask("2", 0.1, 56.0), ask("3", 0.01, 4.0)];

    let result = calculator().buy(61.0, &asks).unwrap();

    assert_result(&result, 0.11, &["1", "3"]);
}

#[test]
fn buy_at_capacity_limit_switches_to_cheaper_ask() {
    // one euro less and "1" no longer fits next to "3"
    let asks = vec![ask("1", 0.1, 57.0), ask("2", 0.1, 56.0), ask("3", 0.01, 4.0)];

    let result = calculator().buy(60.0, &asks).unwrap();

    assert_result(&result, 0.11, &["2", "3"]);
}

#[test]
fn buy_full_order_book() {
    let mut asks = Vec::new();
    for i in 1..=7 {
        asks.push(ask(&format!("3k_{}", i), 1.0, 3000.0));
    }
    for i in 1..=4 {
        asks.push(ask(&format!("3.3k_{}", i), 1.0, 3300.0));
    }
    for i in 1..=9 {
        asks.push(ask(&format!("3.5k_{}", i), 1.0, 3500.0));
    }

    let result = calculator().buy(28_000.0, &asks).unwrap();

    assert_result(
        &result,
        9.0,
        &[
            "3k_1", "3k_2", "3k_3", "3k_4", "3k_5", "3k_6", "3k_7", "3.3k_1", "3.3k_2",
        ],
    );
}

#[test]
fn buy_with_no_asks() {
    let result = calculator().buy(1_000.0, &[]).unwrap();
    assert_eq!(result, BestValueResult::empty());
}

// --- sell ---

#[test]
fn sell_picks_best_bids_within_crypto_budget() {
    let bids = vec![
        bid("1", 0.5, 100.0),
        bid("2", 6.0, 100.0),
        bid("3", 4.0, 300.0),
        bid("4", 0.5, 15.0),
        bid("5", 7.0, 100_000.0),
        bid("6", 3.0, 100.0),
    ];

    let result = calculator().sell(6.0, &bids).unwrap();

    assert_result(&result, 415.0, &["1", "3", "4"]);
}

#[test]
fn sell_with_no_crypto() {
    let bids = vec![bid("1", 0.5, 100.0)];
    let result = calculator().sell(0.0, &bids).unwrap();

    assert_eq!(result, BestValueResult::empty());
}

#[test]
fn repeated_calls_are_identical() {
    let asks = vec![ask("1", 0.1, 50.5), ask("2", 0.15, 55.03), ask("3", 0.01, 40.1)];
    let calc = calculator();

    let first = calc.buy(110.0, &asks).unwrap();
    for _ in 0..3 {
        assert_eq!(calc.buy(110.0, &asks).unwrap(), first);
    }
}
