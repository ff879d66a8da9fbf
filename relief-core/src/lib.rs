//! relief-core: domain types for the donation transparency ledger

pub mod ledger;
pub mod media;
pub mod ordering;
pub mod story;

pub use ledger::{FinancialSummary, Transaction, TransactionType};
pub use media::{StoryMedia, resolve_image_url, youtube_id};
pub use ordering::{Dated, parse_sheet_date, sort_newest_first};
pub use story::ImpactStory;
