//! exa-research: research paper search through the Exa API
//!
//! One query in, one block of text out. The search is restricted to recent
//! research papers, progress is reported to the host through a
//! [`status::Notifier`], and provider failures come back as a JSON error
//! payload instead of an `Err`.

pub mod config;
pub mod network;
pub mod provider;
pub mod search;
pub mod status;

pub use config::Settings;
pub use provider::{ExaClient, ProviderError, SearchProvider};
pub use search::PaperSearch;
pub use status::{Event, NoopNotifier, Notifier, Status};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
