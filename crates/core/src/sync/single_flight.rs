//! Single-flight coordination
//!
//! Collapses concurrent requests for the same side-effecting operation into
//! one execution whose outcome every requester shares. The pending execution
//! is owned by the `SingleFlight` value, so two instances never interact.
//!
//! The check-and-create of the pending slot happens under a synchronous
//! mutex that is released before anything is awaited. The operation itself
//! runs on its own tokio task: a requester that drops its future stops
//! waiting, but never cancels the work other requesters depend on.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

/// Failure of the coordination itself (not of the operation).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SingleFlightError {
    /// The task driving the operation panicked or was cancelled by runtime
    /// shutdown.
    #[error("single-flight task for '{operation}' did not complete: {reason}")]
    TaskFailed { operation: &'static str, reason: String },
}

type Pending<T> = Shared<BoxFuture<'static, Result<T, SingleFlightError>>>;
type Slot<T> = Arc<Mutex<Option<Pending<T>>>>;

/// Instance-scoped single-flight slot for operations producing `T`.
pub struct SingleFlight<T>
where
    T: Clone + Send + Sync + 'static,
{
    operation: &'static str,
    pending: Slot<T>,
}

impl<T> SingleFlight<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an empty slot; `operation` labels log events.
    pub fn new(operation: &'static str) -> Self {
        Self { operation, pending: Arc::new(Mutex::new(None)) }
    }

    /// Whether an execution is currently pending.
    pub fn is_in_flight(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Join the pending execution, or start one with `start` if none exists.
    ///
    /// `start` is only invoked by the requester that creates the execution.
    /// The slot is cleared when the execution settles, before its outcome is
    /// observable, so a requester arriving afterwards starts a fresh one.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns `SingleFlightError::TaskFailed` if the driving task panicked.
    pub async fn run<F, Fut>(&self, start: F) -> Result<T, SingleFlightError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let pending = {
            let mut slot = self.pending.lock();
            if let Some(existing) = slot.as_ref() {
                debug!(operation = self.operation, "joining in-flight operation");
                existing.clone()
            } else {
                debug!(operation = self.operation, "starting single-flight operation");
                let created = self.spawn(start());
                *slot = Some(created.clone());
                created
            }
        };

        pending.await
    }

    fn spawn<Fut>(&self, operation: Fut) -> Pending<T>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        let guard = ClearOnDrop(Arc::clone(&self.pending));
        let task = tokio::spawn(async move {
            let _guard = guard;
            operation.await
        });

        let name = self.operation;
        task.map(move |joined| {
            joined.map_err(|err| SingleFlightError::TaskFailed {
                operation: name,
                reason: err.to_string(),
            })
        })
        .boxed()
        .shared()
    }
}

impl<T> std::fmt::Debug for SingleFlight<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleFlight")
            .field("operation", &self.operation)
            .field("in_flight", &self.is_in_flight())
            .finish()
    }
}

/// Empties the slot when the driving task finishes, panics or is dropped.
struct ClearOnDrop<T>(Slot<T>)
where
    T: Clone + Send + Sync + 'static;

impl<T> Drop for ClearOnDrop<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.0.lock().take();
    }
}
