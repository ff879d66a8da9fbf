//! Where sheet text comes from.

use anyhow::{Context, Result, bail};

/// Fetches the raw body behind a feed URL.
pub trait TextSource: Send + Sync {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Plain GET over reqwest. No retries; timeouts are whatever the client has.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl TextSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("GET {url}: {status}");
        }

        resp.text().await.context("read response body")
    }
}
