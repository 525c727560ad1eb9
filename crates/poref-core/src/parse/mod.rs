//! Multi-layout purchase-order reference parsing.

pub mod date;
pub mod extractors;
mod parser;
pub mod patterns;

pub use extractors::{
    BarePairExtractor, KeywordLineExtractor, PerRowDateExtractor, QuotedKeywordExtractor,
    RecordExtractor,
};
pub use parser::FormatParser;
