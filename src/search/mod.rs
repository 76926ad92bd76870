//! Search module
//!
//! Builds the time-windowed research paper query, runs it against the
//! provider and cleans up the returned text.

mod text;
mod tool;
mod window;

pub use text::unescape_backslashes;
pub use tool::{PaperSearch, ToolInfo, CATEGORY, NUM_RESULTS};
pub use window::{format_timestamp, lookback_days, LookbackWindow, TIMESTAMP_FORMAT};
