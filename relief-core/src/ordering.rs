//! Newest-first ordering for feeds whose dates are free-form sheet text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;

use crate::{ImpactStory, Transaction};

/// Anything carrying a sheet date string.
pub trait Dated {
    fn date_text(&self) -> &str;
}

impl Dated for Transaction {
    fn date_text(&self) -> &str {
        &self.date
    }
}

impl Dated for ImpactStory {
    fn date_text(&self) -> &str {
        &self.date
    }
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%m/%d/%Y %H:%M:%S"];

/// Best-effort parse of a date as people type it into a spreadsheet.
///
/// Slash dates are read month-first, matching how browsers read them.
pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Stable newest-first sort. Rows whose date can't be read keep their relative
/// order and go last.
pub fn sort_newest_first<T: Dated>(items: &mut [T]) {
    items.sort_by_cached_key(|item| Reverse(parse_sheet_date(item.date_text())));
}
