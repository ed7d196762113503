//! Aggregation core of the sales dashboards.
//!
//! Everything here is synchronous and side-effect free: each call derives a
//! fresh result from the records it is given, and degenerate input (no
//! records, unknown year, unclassifiable records, zero-width ranges) yields
//! empty or zeroed output instead of an error.

pub mod aggregator;
pub mod fields;
pub mod filter;
pub mod histogram;
pub mod summarizer;

pub use aggregator::*;
pub use fields::FieldSource;
pub use filter::*;
pub use histogram::*;
pub use summarizer::*;
