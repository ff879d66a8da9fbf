//! Sheet CSV reader.
//!
//! The published-sheet export is simple enough that the default reader works
//! line by line:
//!
//!   Date,Description,Category,Amount,Type,ProofLink
//!   2025-12-01,Relief kits,Supplies,"1,000",Debit,https://...
//!
//! A double-quoted cell may hold commas. It runs until the first quote that is
//! followed by a comma or the end of the line, so stray inner quotes survive.
//! Escaped `""` quotes and multi-line cells are not understood by the lenient
//! reader; `CsvDialect::Rfc4180` handles those.

use regex::Regex;
use tracing::debug;

use crate::types::{CsvDialect, CsvTable, RawRecord};

const FIELD_PATTERN: &str = r#"^\s*(?:"(.*?)"|([^,]*?))\s*(,|$)"#;

/// Parse with the lenient reader.
pub fn parse_csv(text: &str) -> CsvTable {
    parse_csv_with(text, CsvDialect::Lenient)
}

/// Parse a sheet export. Never fails: unreadable parts are skipped or left blank.
pub fn parse_csv_with(text: &str, dialect: CsvDialect) -> CsvTable {
    match dialect {
        CsvDialect::Lenient => parse_lenient(text),
        CsvDialect::Rfc4180 => parse_rfc4180(text),
    }
}

fn parse_lenient(text: &str) -> CsvTable {
    let mut lines = text.split('\n');
    let headers = split_header(lines.next().unwrap_or(""));

    // Without the pattern every row falls back to a plain comma split.
    let field_re = Regex::new(FIELD_PATTERN).ok();

    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| RawRecord::from_row(&headers, tokenize_line(line, field_re.as_ref())))
        .collect();

    CsvTable { headers, records }
}

/// Header cells lose every double quote and surrounding whitespace.
pub fn split_header(line: &str) -> Vec<String> {
    line.trim_start_matches('\u{feff}')
        .split(',')
        .map(clean_header)
        .collect()
}

fn clean_header(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

fn tokenize_line(line: &str, field_re: Option<&Regex>) -> Vec<String> {
    let mut fields = Vec::new();

    if let Some(re) = field_re {
        let mut rest = line;
        while let Some(caps) = re.captures(rest) {
            let value = match (caps.get(1), caps.get(2)) {
                (Some(quoted), _) => quoted.as_str().trim().to_string(),
                (None, Some(bare)) => clean_field(bare.as_str()),
                (None, None) => String::new(),
            };
            fields.push(value);

            let at_end = caps.get(3).is_none_or(|sep| sep.as_str().is_empty());
            let Some(whole) = caps.get(0) else { break };
            if at_end {
                break;
            }
            rest = &rest[whole.end()..];
        }
    }

    if fields.is_empty() {
        fields = line.split(',').map(clean_field).collect();
    }
    fields
}

/// Drop one leading and one trailing quote, then trim.
fn clean_field(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.trim().to_string()
}

fn parse_rfc4180(text: &str) -> CsvTable {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match rdr.headers() {
        Ok(h) => h
            .iter()
            .map(|h| clean_header(h.trim_start_matches('\u{feff}')))
            .collect(),
        Err(e) => {
            debug!(error = %e, "unreadable CSV header row");
            return CsvTable::default();
        }
    };

    let mut records = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(row) => {
                // Whitespace-only line. A row of bare commas is a real record, as in the lenient reader.
                if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
                    continue;
                }
                let values = row.iter().map(str::to_string).collect();
                records.push(RawRecord::from_row(&headers, values));
            }
            Err(e) => debug!(error = %e, "skipping unreadable CSV record"),
        }
    }

    CsvTable { headers, records }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_non_blank_line() {
        let text = "Date,Title,Description\n2025-12-01,A,first\n2025-12-02,B,second\n2025-12-03,C,third\n";
        let table = parse_csv(text);
        assert_eq!(table.headers, vec!["Date", "Title", "Description"]);
        assert_eq!(table.records.len(), 3);
        for rec in &table.records {
            assert_eq!(rec.len(), 3);
        }
        assert_eq!(table.records[1].value("Title"), "B");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse_csv("H1,H2\n\n1,2\n\n");
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("H1"), Some("1"));
        assert_eq!(table.records[0].get("H2"), Some("2"));
    }

    #[test]
    fn test_quoted_field_keeps_commas() {
        let table = parse_csv("H1\n\"a,b\"");
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].value("H1"), "a,b");

        let table = parse_csv("Amount,Type\n\"1,000\",Debit");
        assert_eq!(table.records[0].value("Amount"), "1,000");
        assert_eq!(table.records[0].value("Type"), "Debit");
    }

    #[test]
    fn test_short_rows_fill_blanks() {
        let table = parse_csv("Date,Title,Description,ImageUrl\n2025-12-01,Only a title");
        let rec = &table.records[0];
        assert_eq!(rec.len(), 4);
        assert_eq!(rec.value("Title"), "Only a title");
        assert_eq!(rec.get("Description"), Some(""));
        assert_eq!(rec.get("ImageUrl"), Some(""));
    }

    #[test]
    fn test_empty_cells_keep_their_column() {
        let table = parse_csv("Date,Category,Amount,ProofLink\n2025-12-01,,500,");
        let rec = &table.records[0];
        assert_eq!(rec.value("Category"), "");
        assert_eq!(rec.value("Amount"), "500");
        assert_eq!(rec.value("ProofLink"), "");
    }

    #[test]
    fn test_quoted_headers_and_crlf() {
        let table = parse_csv("\u{feff}\"Date\", \"Title\"\r\n2025-12-01 , Clinic reopened \r\n\r\n");
        assert_eq!(table.headers, vec!["Date", "Title"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].value("Date"), "2025-12-01");
        assert_eq!(table.records[0].value("Title"), "Clinic reopened");
    }

    #[test]
    fn test_stray_inner_quotes_tolerated() {
        let table = parse_csv("Title,Description\n\"The \"Ditwah\" appeal\",thanks");
        let rec = &table.records[0];
        assert_eq!(rec.value("Title"), "The \"Ditwah\" appeal");
        assert_eq!(rec.value("Description"), "thanks");
    }

    #[test]
    fn test_unterminated_quote_is_stripped() {
        let table = parse_csv("A,B\n\"open,closed");
        assert_eq!(table.records[0].value("A"), "open");
        assert_eq!(table.records[0].value("B"), "closed");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let table = parse_csv("A,B\n1,2,3,4");
        assert_eq!(table.records[0].len(), 2);
        assert_eq!(table.records[0].value("B"), "2");
    }

    #[test]
    fn test_empty_text() {
        let table = parse_csv("");
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_naive_split_without_pattern() {
        let fields = tokenize_line("a, \"b\" ,c", None);
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rfc4180_escaped_quotes_and_multiline() {
        let text = "Title,Description\n\"Said \"\"thanks\"\"\",\"line one\nline two\"\n\n";
        let table = parse_csv_with(text, CsvDialect::Rfc4180);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].value("Title"), "Said \"thanks\"");
        assert_eq!(table.records[0].value("Description"), "line one\nline two");
    }

    #[test]
    fn test_rfc4180_short_rows_and_blank_lines() {
        let table = parse_csv_with("H1,H2\n\n1\n\n3,4\n", CsvDialect::Rfc4180);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].value("H1"), "1");
        assert_eq!(table.records[0].value("H2"), "");
        assert_eq!(table.records[1].value("H2"), "4");
    }

    #[test]
    fn test_dialects_agree_on_comma_only_rows() {
        let text = "A,B,C\n,,\n   \n1,2,3\n";
        let lenient = parse_csv_with(text, CsvDialect::Lenient);
        let strict = parse_csv_with(text, CsvDialect::Rfc4180);

        assert_eq!(lenient.records.len(), 2);
        assert_eq!(strict.records.len(), 2);
        assert_eq!(strict.records[0].value("B"), "");
        assert_eq!(strict.records[1].value("C"), "3");
        assert_eq!(lenient.records, strict.records);
    }
}
