//! Fetch-and-normalize service behind the ledger and story views.
//!
//! Both fetches fail soft: whatever goes wrong (transport, HTTP status, a body
//! that isn't the sheet) is logged as a structured warning and the caller gets
//! an empty list. Use the `try_` variants to see the error instead.

use anyhow::{Context, Result};
use relief_core::{ImpactStory, Transaction};
use relief_ingest::{stories_from_csv, transactions_from_csv};
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::mock;
use crate::source::{HttpSource, TextSource};

pub struct FeedService<S = HttpSource> {
    config: FeedConfig,
    source: S,
}

impl FeedService<HttpSource> {
    pub fn new(config: FeedConfig) -> Self {
        Self::with_source(config, HttpSource::new())
    }
}

impl<S: TextSource> FeedService<S> {
    pub fn with_source(config: FeedConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Ledger rows in sheet order; empty on any failure.
    pub async fn fetch_transactions(&self) -> Vec<Transaction> {
        let result = self.try_fetch_transactions().await;
        fail_soft("transactions", &self.config.transactions_url, result)
    }

    /// Impact stories in sheet order; empty on any failure.
    pub async fn fetch_impact_stories(&self) -> Vec<ImpactStory> {
        let result = self.try_fetch_impact_stories().await;
        fail_soft("stories", &self.config.impact_url, result)
    }

    /// Both feeds, fetched concurrently.
    pub async fn fetch_all(&self) -> (Vec<Transaction>, Vec<ImpactStory>) {
        tokio::join!(self.fetch_transactions(), self.fetch_impact_stories())
    }

    pub async fn try_fetch_transactions(&self) -> Result<Vec<Transaction>> {
        if self.config.use_mock_data {
            tokio::time::sleep(self.config.mock_delay()).await;
            return Ok(mock::mock_transactions());
        }

        let url = &self.config.transactions_url;
        let text = self.source.fetch_text(url).await?;
        let txns = transactions_from_csv(&text, self.config.csv_dialect)
            .with_context(|| format!("parse transactions CSV from {url}"))?;

        debug!(feed = "transactions", count = txns.len(), "feed loaded");
        Ok(txns)
    }

    pub async fn try_fetch_impact_stories(&self) -> Result<Vec<ImpactStory>> {
        if self.config.use_mock_data {
            tokio::time::sleep(self.config.mock_delay()).await;
            return Ok(mock::mock_impact_stories());
        }

        let url = &self.config.impact_url;
        let text = self.source.fetch_text(url).await?;
        let stories = stories_from_csv(&text, self.config.csv_dialect)
            .with_context(|| format!("parse stories CSV from {url}"))?;

        debug!(feed = "stories", count = stories.len(), "feed loaded");
        Ok(stories)
    }
}

fn fail_soft<T>(feed: &'static str, url: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(feed, url, error = %format!("{e:#}"), "feed fetch failed; serving empty list");
            Vec::new()
        }
    }
}
