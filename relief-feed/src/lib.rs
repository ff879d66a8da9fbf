//! relief-feed: configured fetch of the ledger and story sheets, live or mock

pub mod config;
pub mod mock;
pub mod service;
pub mod source;

pub use config::FeedConfig;
pub use service::FeedService;
pub use source::{HttpSource, TextSource};
