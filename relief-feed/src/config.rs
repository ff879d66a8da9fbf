use relief_ingest::CsvDialect;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a `FeedService` needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Serve the bundled sample data instead of touching the network
    pub use_mock_data: bool,
    /// Published-to-web CSV export of the ledger sheet
    pub transactions_url: String,
    /// Published-to-web CSV export of the impact-stories sheet
    pub impact_url: String,
    /// Artificial latency for mock responses, so loading states show up
    pub mock_delay_ms: u64,
    pub csv_dialect: CsvDialect,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            use_mock_data: true,
            transactions_url: String::new(),
            impact_url: String::new(),
            mock_delay_ms: 800,
            csv_dialect: CsvDialect::Lenient,
        }
    }
}

impl FeedConfig {
    pub fn mock() -> Self {
        Self::default()
    }

    pub fn live(transactions_url: impl Into<String>, impact_url: impl Into<String>) -> Self {
        Self {
            use_mock_data: false,
            transactions_url: transactions_url.into(),
            impact_url: impact_url.into(),
            ..Self::default()
        }
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}
