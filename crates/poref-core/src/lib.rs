//! Core library for purchase-order reference intake.
//!
//! This crate provides:
//! - Multi-layout parsing of raw PO reference text into structured records
//! - `DD-MMM-YY` control date normalization
//! - JSON response bodies for the request-handling layer

pub mod error;
pub mod models;
pub mod parse;
pub mod response;

pub use error::{ParseError, Result};
pub use models::record::PoRecord;
pub use parse::{FormatParser, RecordExtractor};
pub use response::response_body;
