//! Reporting sinks for assertion failures.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives assertion failures.
///
/// Failures are soft: recording one never stops the calling test. Any test
/// framework handle that can mark itself failed with a message can implement
/// this.
pub trait Reporter {
    /// Marks the sink failed and records `message`.
    fn fail(&self, message: &str);

    /// Returns `true` once [`fail`](Self::fail) has been called.
    fn failed(&self) -> bool;
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn fail(&self, message: &str) {
        (**self).fail(message);
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }
}

/// Thread-safe in-memory [`Reporter`].
///
/// # Example
///
/// ```
/// use route53_assert::{Recorder, Reporter};
///
/// let t = Recorder::new();
/// assert!(!t.failed());
///
/// t.fail("hosted zone \"example.com.\" not found");
/// assert!(t.failed());
/// assert_eq!(t.failures().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<String>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in order.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Panics with every recorded message if any failure was recorded.
    ///
    /// Call at the end of a test to turn soft failures into a test failure.
    ///
    /// # Panics
    ///
    /// If [`failed`](Reporter::failed) is `true`.
    pub fn finish(self) {
        let failures = self
            .failures
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        assert!(
            failures.is_empty(),
            "{} assertion(s) failed:\n  {}",
            failures.len(),
            failures.join("\n  ")
        );
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for Recorder {
    fn fail(&self, message: &str) {
        self.lock().push(message.to_string());
    }

    fn failed(&self) -> bool {
        !self.lock().is_empty()
    }
}
