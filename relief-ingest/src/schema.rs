//! Expected sheet columns, checked before any row is normalized.

use crate::error::IngestError;

/// Column set of one published sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const TRANSACTIONS: SheetSchema = SheetSchema {
    name: "transactions",
    columns: &["Date", "Description", "Category", "Amount", "Type", "ProofLink"],
};

pub const STORIES: SheetSchema = SheetSchema {
    name: "stories",
    columns: &["Date", "Title", "Description", "ImageUrl"],
};

/// How a header row lines up with the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderReport {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

impl HeaderReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl SheetSchema {
    /// A header row sharing no column with the schema is not this sheet at all
    /// (an HTML error page, a different tab). Partial matches are accepted;
    /// missing columns fall back to their defaults during normalization.
    pub fn check(&self, headers: &[String]) -> Result<HeaderReport, IngestError> {
        let missing: Vec<String> = self
            .columns
            .iter()
            .filter(|c| !headers.iter().any(|h| h == *c))
            .map(|c| c.to_string())
            .collect();

        if missing.len() == self.columns.len() {
            let found: String = headers.join(",").chars().take(80).collect();
            return Err(IngestError::UnrecognizedHeader {
                sheet: self.name,
                expected: self.columns.join(","),
                found,
            });
        }

        let unexpected = headers
            .iter()
            .filter(|h| !h.is_empty() && !self.columns.contains(&h.as_str()))
            .cloned()
            .collect();

        Ok(HeaderReport { missing, unexpected })
    }
}
