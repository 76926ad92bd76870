//! Status reporting for host runtimes
//!
//! The host supplies a [`Notifier`]; the search reports progress through a
//! [`StatusReporter`] wrapping it. Hosts without a UI pass [`NoopNotifier`].

mod event;
mod notifier;

pub use event::*;
pub use notifier::*;
