use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn sample_snapshot() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("exchanges/exchange-01.json")
}

fn run(args: &[&str], config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_best-value"))
        .args(args)
        .arg("--config")
        .arg(config)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .output()
        .expect("run best-value")
}

#[test]
fn calc_prints_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("best-value.json");
    let snapshot = sample_snapshot();

    let output = run(&["calc", snapshot.to_str().unwrap()], &config);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("- Buy"));
    assert!(stdout.contains("   - Cryptos to gain: 0.25"));
    assert!(stdout.contains("   - Ask orders to use: ask-1, ask-2"));
    assert!(stdout.contains("   - Euros to gain: 415"));
    assert!(stdout.contains("   - Bid orders to use: bid-1, bid-3, bid-4"));
    assert!(config.exists(), "default config should be written");
}

#[test]
fn calc_json_matches_service_shape() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("best-value.json");
    let snapshot = sample_snapshot();

    let output = run(&["calc", snapshot.to_str().unwrap(), "--json"], &config);
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["exchangeId"], "exchange-01");
    assert_eq!(body["sellResult"]["orderIds"], serde_json::json!(["bid-1", "bid-3", "bid-4"]));
}

#[test]
fn calc_fails_on_invalid_funds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("best-value.json");
    let snapshot = dir.path().join("bad.json");
    std::fs::write(&snapshot, r#"{ "Id": "bad", "AvailableFunds": { "Euro": -1 } }"#).unwrap();

    let output = run(&["calc", snapshot.to_str().unwrap()], &config);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Invalid capacity"), "stderr: {}", stderr);
}

#[test]
fn calc_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("best-value.json");

    let output = run(&["calc", "does-not-exist.json"], &config);

    assert!(!output.status.success());
}
