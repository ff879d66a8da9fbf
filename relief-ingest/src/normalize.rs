//! Sheet rows → typed ledger records.

use regex::Regex;
use relief_core::{ImpactStory, Transaction, TransactionType};
use std::sync::LazyLock;
use tracing::warn;

use crate::csv_text::parse_csv_with;
use crate::error::IngestError;
use crate::schema::{self, SheetSchema};
use crate::types::{CsvDialect, CsvTable, RawRecord};

pub const DEFAULT_CATEGORY: &str = "General";

static LEADING_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").ok());

/// Read a sheet amount like `1,234.50`.
///
/// Thousands separators are dropped and the leading number is taken,
/// so `1000 LKR` reads as 1000. No leading number, or one that overflows, is 0.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = raw.replace(',', "");
    let s = cleaned.trim();

    LEADING_NUMBER
        .as_ref()
        .and_then(|re| re.find(s))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `index` is the record's position among the parsed (non-blank) rows.
pub fn transaction_from_record(index: usize, rec: &RawRecord) -> Transaction {
    Transaction {
        id: format!("trans-{index}"),
        date: rec.value("Date").to_string(),
        description: rec.value("Description").to_string(),
        category: rec.non_empty("Category").unwrap_or(DEFAULT_CATEGORY).to_string(),
        amount: parse_amount(rec.value("Amount")),
        kind: TransactionType::from_sheet_value(rec.value("Type")),
        proof_link: rec.non_empty("ProofLink").map(str::to_string),
    }
}

pub fn story_from_record(index: usize, rec: &RawRecord) -> ImpactStory {
    ImpactStory {
        id: format!("story-{index}"),
        date: rec.value("Date").to_string(),
        title: rec.value("Title").to_string(),
        description: rec.value("Description").to_string(),
        image_url: rec.non_empty("ImageUrl").map(str::to_string),
    }
}

/// Parse a transactions sheet export.
pub fn transactions_from_csv(
    text: &str,
    dialect: CsvDialect,
) -> Result<Vec<Transaction>, IngestError> {
    let table = checked_table(text, dialect, &schema::TRANSACTIONS)?;
    Ok(table
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| transaction_from_record(i, rec))
        .collect())
}

/// Parse an impact-stories sheet export.
pub fn stories_from_csv(text: &str, dialect: CsvDialect) -> Result<Vec<ImpactStory>, IngestError> {
    let table = checked_table(text, dialect, &schema::STORIES)?;
    Ok(table
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| story_from_record(i, rec))
        .collect())
}

fn checked_table(
    text: &str,
    dialect: CsvDialect,
    schema: &SheetSchema,
) -> Result<CsvTable, IngestError> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let table = parse_csv_with(text, dialect);
    let report = schema.check(&table.headers)?;
    if !report.is_complete() || !report.unexpected.is_empty() {
        warn!(
            sheet = schema.name,
            missing = ?report.missing,
            unexpected = ?report.unexpected,
            "sheet header differs from the expected columns; missing fields use defaults"
        );
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    const LEDGER_HEADER: &str = "Date,Description,Category,Amount,Type,ProofLink";

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.50"), 1234.5);
        assert_eq!(parse_amount("1,000"), 1000.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-250.75"), -250.75);
        assert_eq!(parse_amount(" 12,500 "), 12500.0);
        assert_eq!(parse_amount("1000 LKR"), 1000.0);
        assert_eq!(parse_amount("Rs. 500"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("1e400"), 0.0);
        assert_eq!(parse_amount("1.5e3"), 1500.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("12abc"), 12.0);
    }

    #[test]
    fn test_single_row_end_to_end() {
        let text = format!("{LEDGER_HEADER}\n2024-01-01,Relief kits,Supplies,\"1,000\",Debit,http://x");
        let txns = transactions_from_csv(&text, CsvDialect::Lenient).unwrap();

        assert_eq!(
            txns,
            vec![Transaction {
                id: "trans-0".to_string(),
                date: "2024-01-01".to_string(),
                description: "Relief kits".to_string(),
                category: "Supplies".to_string(),
                amount: 1000.0,
                kind: TransactionType::Debit,
                proof_link: Some("http://x".to_string()),
            }]
        );
    }

    #[test]
    fn test_defaults_for_blank_cells() {
        let text = format!("{LEDGER_HEADER}\n\n2025-12-02,Donation from alumni,,\"250,000\",Credit,\n");
        let txns = transactions_from_csv(&text, CsvDialect::Lenient).unwrap();

        assert_eq!(txns.len(), 1);
        let t = &txns[0];
        assert_eq!(t.id, "trans-0");
        assert_eq!(t.category, DEFAULT_CATEGORY);
        assert_eq!(t.amount, 250_000.0);
        assert_eq!(t.kind, TransactionType::Credit);
        assert_eq!(t.proof_link, None);
    }

    #[test]
    fn test_ids_follow_emitted_rows() {
        let text = format!("{LEDGER_HEADER}\na,one,,1,Debit,\n\nb,two,,2,Debit,\n");
        let txns = transactions_from_csv(&text, CsvDialect::Lenient).unwrap();
        let ids: Vec<_> = txns.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["trans-0", "trans-1"]);
    }

    #[test]
    fn test_missing_columns_use_defaults() {
        let txns = transactions_from_csv("Date,Description\n2025-12-03,Boat repair", CsvDialect::Lenient)
            .unwrap();
        assert_eq!(txns[0].category, "General");
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[0].kind, TransactionType::Debit);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_unexpected_columns_are_logged() {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let text = format!("{LEDGER_HEADER},Notes
2025-12-03,Boat repair,,500,Debit,,paid cash
");
        let txns = transactions_from_csv(&text, CsvDialect::Lenient).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 500.0);

        let out = String::from_utf8_lossy(&log.0.lock().unwrap()).to_string();
        assert!(out.contains("WARN"), "expected a warning, got: {out}");
        assert!(out.contains("unexpected=[\"Notes\"]"), "got: {out}");
        assert!(out.contains("missing=[]"), "got: {out}");
    }

    #[test]
    fn test_stories_from_csv() {
        let text = "Date,Title,Description,ImageUrl\n\
                    2025-12-04,Clinic reopened,\"Doctors, nurses and volunteers\",https://freeimage.host/i/abc\n\
                    2025-12-05,Kits packed,Evening shift,\n";
        let stories = stories_from_csv(text, CsvDialect::Lenient).unwrap();

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].id, "story-0");
        assert_eq!(stories[0].description, "Doctors, nurses and volunteers");
        assert_eq!(stories[0].image_url.as_deref(), Some("https://freeimage.host/i/abc"));
        assert_eq!(stories[1].image_url, None);
    }

    #[test]
    fn test_non_csv_body_rejected() {
        let html = "<!DOCTYPE html>\n<html><body>Sign in</body></html>";
        assert!(matches!(
            transactions_from_csv(html, CsvDialect::Lenient),
            Err(IngestError::UnrecognizedHeader { .. })
        ));
        assert_eq!(
            stories_from_csv("  \n", CsvDialect::Lenient),
            Err(IngestError::EmptyInput)
        );
    }
}
