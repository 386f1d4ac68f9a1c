//! Cancellable request context passed through to provider calls.

use crate::error::{ProviderError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Governs cancellation and timeout of the calls a [`Route53Client`]
/// makes on behalf of an assertion.
///
/// Clones share the cancellation flag: cancelling any clone cancels all of
/// them. The assertions never look at the context themselves; client
/// implementations are expected to call [`check`](Self::check).
///
/// [`Route53Client`]: crate::Route53Client
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().with_deadline(Instant::now() + timeout)
    }

    /// Sets the deadline, keeping the shared cancellation flag.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels this context and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Returns an error if the context is cancelled or past its deadline.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Cancelled`] after [`cancel`](Self::cancel),
    /// [`ProviderError::DeadlineExceeded`] once the deadline has passed.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(ProviderError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
