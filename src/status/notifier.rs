//! Notifier capability and the reporter that drives it

use super::event::{Event, Status};
use anyhow::Result;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use tracing::{info, warn};

/// Receiver of status events supplied by the host runtime
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one event. Errors are propagated to the caller of the search.
    async fn notify(&self, event: Event) -> Result<()>;
}

/// Notifier that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _event: Event) -> Result<()> {
        Ok(())
    }
}

type Callback = Box<dyn Fn(Event) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Notifier backed by an async closure
pub struct FnNotifier {
    callback: Callback,
}

impl FnNotifier {
    pub fn new<F, Fut>(callback: F) -> Self
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self {
            callback: Box::new(move |event| callback(event).boxed()),
        }
    }
}

impl std::fmt::Debug for FnNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnNotifier").finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for FnNotifier {
    async fn notify(&self, event: Event) -> Result<()> {
        (self.callback)(event).await
    }
}

/// Notifier that writes events to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, event: Event) -> Result<()> {
        let Event::Status(update) = event;
        match update.status {
            Status::Error => warn!(done = update.done, "[{}] {}", update.status, update.description),
            _ => info!(done = update.done, "[{}] {}", update.status, update.description),
        }
        Ok(())
    }
}

/// Emits structured status events through a notifier
pub struct StatusReporter<'a> {
    notifier: &'a dyn Notifier,
}

impl<'a> StatusReporter<'a> {
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Emit a status event
    pub async fn emit(&self, description: impl Into<String>, status: Status, done: bool) -> Result<()> {
        self.notifier
            .notify(Event::status(description, status, done))
            .await
    }

    /// Emit an in-progress event
    pub async fn progress(&self, description: impl Into<String>) -> Result<()> {
        self.emit(description, Status::InProgress, false).await
    }

    /// Emit the terminal success event
    pub async fn complete(&self, description: impl Into<String>) -> Result<()> {
        self.emit(description, Status::Complete, true).await
    }

    /// Emit the terminal error event
    pub async fn error(&self, description: impl Into<String>) -> Result<()> {
        self.emit(description, Status::Error, true).await
    }
}
