use thiserror::Error;

/// Reasons a body can't be read as the expected sheet export.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("empty CSV body")]
    EmptyInput,

    #[error("unrecognized {sheet} header row (expected some of {expected}): {found:?}")]
    UnrecognizedHeader {
        sheet: &'static str,
        expected: String,
        found: String,
    },
}
