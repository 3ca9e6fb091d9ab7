use anyhow::Context;
use async_trait::async_trait;
use ratebot_core::{Error, RateEntry, RateFeed, RateFeedSnapshot, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Root of the Vietcombank exchange-rate document.
#[derive(Debug, Deserialize)]
struct ExrateList {
    #[serde(rename = "DateTime", default)]
    date_time: String,
    #[serde(rename = "Exrate", default)]
    rates: Vec<Exrate>,
    #[serde(rename = "Source", default)]
    source: String,
}

#[derive(Debug, Deserialize)]
struct Exrate {
    #[serde(rename = "@CurrencyCode")]
    code: String,
    #[serde(rename = "@CurrencyName")]
    name: String,
    #[serde(rename = "@Buy")]
    buy: String,
    #[serde(rename = "@Transfer")]
    transfer: String,
    #[serde(rename = "@Sell")]
    sell: String,
}

impl From<Exrate> for RateEntry {
    fn from(rate: Exrate) -> Self {
        Self {
            currency_code: rate.code.trim().to_string(),
            currency_name: rate.name.trim().to_string(),
            buy: rate.buy,
            transfer: rate.transfer,
            sell: rate.sell,
        }
    }
}

/// Rate feed backed by Vietcombank's public XML endpoint.
pub struct VietcombankFeed {
    client: Client,
    url: String,
}

impl VietcombankFeed {
    pub const DEFAULT_URL: &'static str =
        "http://www.vietcombank.com.vn/ExchangeRates/ExrateXML.aspx";

    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse a Vietcombank document into a snapshot.
    ///
    /// A document without any `Exrate` record is rejected: an empty list is
    /// what an error page or a changed schema looks like.
    pub fn parse_document(body: &str) -> Result<RateFeedSnapshot> {
        let list: ExrateList =
            quick_xml::de::from_str(body).map_err(|e| Error::Parse(e.to_string()))?;

        if list.rates.is_empty() {
            return Err(Error::Parse("document contains no Exrate records".into()));
        }

        let entries = list.rates.into_iter().map(RateEntry::from).collect();
        Ok(RateFeedSnapshot::new(
            list.date_time.trim().to_string(),
            entries,
            list.source.trim().to_string(),
        ))
    }

    async fn download(&self) -> reqwest::Result<String> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl RateFeed for VietcombankFeed {
    async fn fetch_snapshot(&self) -> Result<RateFeedSnapshot> {
        debug!("Fetching exchange rates from {}", self.url);

        let body = self
            .download()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        let snapshot = Self::parse_document(&body)?;

        info!(
            "Fetched {} exchange rates (published {})",
            snapshot.len(),
            snapshot.timestamp
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use tokio::net::TcpListener;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ExrateList>
  <DateTime>10/19/2026 8:30:12 AM</DateTime>
  <Exrate CurrencyCode="AUD" CurrencyName="AUSTRALIAN DOLLAR   " Buy="16,380.12" Transfer="16,545.57" Sell="17,075.81" />
  <Exrate CurrencyCode="EUR" CurrencyName="EURO" Buy="29,654.27" Transfer="29,953.81" Sell="31,278.63" />
  <Exrate CurrencyCode="USD" CurrencyName="US DOLLAR" Buy="26,085.00" Transfer="26,115.00" Sell="26,385.00" />
  <Source>Joint Stock Commercial Bank for Foreign Trade of Vietnam - Vietcombank</Source>
</ExrateList>"#;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("bind: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("local_addr: {e}"));
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}/ExrateXML.aspx")
    }

    fn feed(url: String) -> VietcombankFeed {
        VietcombankFeed::new(url, Duration::from_secs(5)).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn parses_document_in_order() {
        let snapshot = VietcombankFeed::parse_document(DOCUMENT).unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(snapshot.timestamp, "10/19/2026 8:30:12 AM");
        assert!(snapshot.source.ends_with("Vietcombank"));
        let codes: Vec<&str> = snapshot
            .entries
            .iter()
            .map(|e| e.currency_code.as_str())
            .collect();
        assert_eq!(codes, ["AUD", "EUR", "USD"]);

        let aud = &snapshot.entries[0];
        assert_eq!(aud.currency_name, "AUSTRALIAN DOLLAR");
        assert_eq!(aud.buy, "16,380.12");
        assert_eq!(aud.transfer, "16,545.57");
        assert_eq!(aud.sell, "17,075.81");
    }

    #[test]
    fn missing_attribute_is_parse_error() {
        let body = r#"<ExrateList><DateTime>x</DateTime><Exrate CurrencyCode="USD" Buy="1" /></ExrateList>"#;
        let err = VietcombankFeed::parse_document(body).err();
        assert!(matches!(err, Some(Error::Parse(_))));
    }

    #[test]
    fn document_without_rates_is_parse_error() {
        let err = VietcombankFeed::parse_document("<html><body>Maintenance</body></html>").err();
        assert!(matches!(err, Some(Error::Parse(_))));
    }

    #[tokio::test]
    async fn fetches_snapshot_over_http() {
        let url = serve(Router::new().route("/ExrateXML.aspx", get(|| async { DOCUMENT }))).await;

        let snapshot = feed(url)
            .fetch_snapshot()
            .await
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(snapshot.len(), 3);
    }

    #[tokio::test]
    async fn server_error_is_network_error() {
        let url = serve(Router::new().route(
            "/ExrateXML.aspx",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        ))
        .await;

        let err = feed(url).fetch_snapshot().await.err();
        assert!(matches!(err, Some(Error::Network(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("bind: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("local_addr: {e}"));
        drop(listener);

        let err = feed(format!("http://{addr}/ExrateXML.aspx"))
            .fetch_snapshot()
            .await
            .err();
        assert!(matches!(err, Some(Error::Network(_))));
    }
}
