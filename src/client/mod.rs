use crate::domain::ExchangeSnapshot;
use anyhow::{anyhow, Context, Result};
use log::info;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Where a snapshot comes from: a local JSON file or an http(s) endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotSource {
    File(String),
    Url(String),
}

impl SnapshotSource {
    pub fn parse(input: &str) -> Self {
        let lower = input.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SnapshotSource::Url(input.to_string())
        } else {
            SnapshotSource::File(input.to_string())
        }
    }
}

#[derive(Clone)]
pub struct SnapshotClient {
    client: Client,
}

// ==================================================
// CONSTRUCTOR
// ==================================================
impl SnapshotClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("HTTP client")?;

        Ok(Self { client })
    }

    // ==================================================
    // LOAD
    // ==================================================
    pub async fn load(&self, input: &str) -> Result<ExchangeSnapshot> {
        match SnapshotSource::parse(input) {
            SnapshotSource::File(path) => read_snapshot(Path::new(&path)).await,
            SnapshotSource::Url(url) => self.fetch(&url).await,
        }
    }

    async fn fetch(&self, url: &str) -> Result<ExchangeSnapshot> {
        info!("🌐 Fetching snapshot {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch snapshot: {}",
                response.status()
            ));
        }

        let body = response.text().await?;
        decode_snapshot(&body).with_context(|| format!("decoding snapshot from {}", url))
    }
}

pub async fn read_snapshot(path: &Path) -> Result<ExchangeSnapshot> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    decode_snapshot(&content).with_context(|| format!("decoding {}", path.display()))
}

pub fn decode_snapshot(json: &str) -> Result<ExchangeSnapshot> {
    serde_json::from_str(json).map_err(|e| anyhow!("Invalid snapshot JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_detects_urls() {
        assert_eq!(
            SnapshotSource::parse("https://example.com/x.json"),
            SnapshotSource::Url("https://example.com/x.json".to_string())
        );
        assert_eq!(
            SnapshotSource::parse("HTTP://host/x"),
            SnapshotSource::Url("HTTP://host/x".to_string())
        );
        assert_eq!(
            SnapshotSource::parse("./exchanges/exchange-01.json"),
            SnapshotSource::File("./exchanges/exchange-01.json".to_string())
        );
    }

    #[test]
    fn decode_reports_bad_json() {
        let err = decode_snapshot("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid snapshot JSON"));
    }

    #[tokio::test]
    async fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.json");
        std::fs::write(&path, r#"{ "Id": "from-file", "AvailableFunds": { "Euro": 5 } }"#).unwrap();

        let client = SnapshotClient::new().unwrap();
        let snapshot = client.load(path.to_str().unwrap()).await.unwrap();

        assert_eq!(snapshot.id, "from-file");
        assert_eq!(snapshot.available_funds.euro, 5.0);
    }

    #[tokio::test]
    async fn load_missing_file_errors() {
        let client = SnapshotClient::new().unwrap();
        let err = client.load("/definitely/not/here.json").await.unwrap_err();

        assert!(err.to_string().contains("reading"));
    }
}
