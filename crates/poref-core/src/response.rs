//! JSON response bodies for the request-handling layer.

use serde_json::{json, Value};

use crate::error::ParseError;
use crate::models::record::PoRecord;

/// Serialize a parse outcome the way the request handler forwards it:
/// an array of record objects on success, `{"error": ...}` on failure.
///
/// Parse failures are data to the caller, not faults; distinguishing
/// them from an empty-but-successful result is the caller's job.
pub fn response_body(outcome: &Result<Vec<PoRecord>, ParseError>) -> Value {
    match outcome {
        Ok(records) => json!(records),
        Err(err) => json!({ "error": err.to_string() }),
    }
}
