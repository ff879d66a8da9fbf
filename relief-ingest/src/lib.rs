//! relief-ingest: sheet CSV parsing and normalization into ledger records.

pub mod csv_text;
pub mod error;
pub mod normalize;
pub mod schema;
pub mod types;

pub use csv_text::{parse_csv, parse_csv_with};
pub use error::IngestError;
pub use normalize::{parse_amount, stories_from_csv, transactions_from_csv};
pub use schema::{HeaderReport, SheetSchema};
pub use types::{CsvDialect, CsvTable, RawRecord};
