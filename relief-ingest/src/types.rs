use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which CSV grammar to apply to a sheet export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    /// Line-oriented, tolerant of stray quotes; no escaped quotes or multi-line cells
    #[default]
    Lenient,
    /// Strict RFC 4180 via the `csv` crate
    Rfc4180,
}

/// One data row keyed by column header. Lives only until normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Pair each header with the value at the same position.
    /// Short rows fill the remaining headers with `""`; a repeated header keeps its last value.
    pub fn from_row(headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let mut fields = HashMap::with_capacity(headers.len());
        for header in headers {
            fields.insert(header.clone(), values.next().unwrap_or_default());
        }
        Self { fields }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// Value for `header`, or `""` when the column doesn't exist.
    pub fn value(&self, header: &str) -> &str {
        self.get(header).unwrap_or("")
    }

    /// Value for `header` unless it is missing or blank.
    pub fn non_empty(&self, header: &str) -> Option<&str> {
        self.get(header).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parser output: headers in sheet order plus one record per non-blank data line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}
