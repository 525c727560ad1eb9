//! Data models for extracted purchase-order references.

pub mod record;

pub use record::PoRecord;
