//! Conversation selection policy
//!
//! - [`is_warmup`] - Detect the synthetic "Warmup" opening exchange
//! - [`should_include`] - Minimum non-meta message threshold, optionally after
//!   trimming the warmup
//! - [`filter_by_range`] - Keep conversations started within a recency window

pub mod inclusion;
pub mod time_range;
pub mod warmup;

pub use inclusion::should_include;
pub use time_range::{HasStartTime, TimeRange, filter_by_range, filter_by_range_at};
pub use warmup::is_warmup;
