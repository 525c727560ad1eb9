//! Error types for the poref-core library.

use thiserror::Error;

/// Parse failures, all recoverable and reportable to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No per-row dates and no global control date token anywhere.
    #[error("no control date found in input")]
    MissingControlDate,

    /// A control date exists but no record layout matched the text.
    #[error("no recognized purchase-order pattern in input")]
    NoRecognizedPattern,

    /// A token matched the `DD-MMM-YY` shape but is not a real date.
    /// A bad date would corrupt every derived record, so it is fatal
    /// for the whole input rather than skipped.
    #[error("malformed date token: {token}")]
    MalformedDate { token: String },
}

/// Result type for the poref library.
pub type Result<T> = std::result::Result<T, ParseError>;
