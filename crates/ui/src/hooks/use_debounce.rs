//! # Debounce Hook
//!
//! Coalesces bursts of events into a single deferred action. The search box
//! uses this to hold back a request until the user stops typing: each
//! keystroke cancels the pending timer and reschedules it, so only the text
//! still current after the quiet period triggers a search.

use dioxus::prelude::*;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Quiet period for free-text input before the deferred action runs
pub const DEBOUNCE: Duration = Duration::from_millis(300);

// ============================================================================
// Debouncer
// ============================================================================

/// A single cancellable deferred task
///
/// Holds at most one scheduled run at a time; scheduling again cancels the
/// previous one.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
    pending: Signal<Option<Task>>,
}

impl Debouncer {
    /// Schedule `work` to run after the quiet period
    ///
    /// Cancels any previously scheduled run first.
    pub fn debounce(&mut self, work: impl Future<Output = ()> + 'static) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }

        let delay = self.delay;
        let mut pending = self.pending;
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
            pending.set(None);
        });
        self.pending.set(Some(task));
    }

    /// Cancel the pending run, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Hook creating a [`Debouncer`] with the given quiet period
pub fn use_debouncer(delay: Duration) -> Debouncer {
    let pending = use_signal(|| None);
    Debouncer { delay, pending }
}
