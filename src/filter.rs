//! Debounced title filter
//!
//! Every edit arms a timer through [`FilterDebouncer::schedule`], aborting the
//! previous one. When a timer fires, [`FilterState::is_settled`] decides
//! whether the captured text is still current and a read should go out.

use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Current contents of the filter input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// True when the user has not typed since `captured` was scheduled
    pub fn is_settled(&self, captured: &str) -> bool {
        self.text == captured
    }

    /// Title to filter on, `None` for the whole collection
    pub fn query(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.clone())
        }
    }
}

/// Single-slot timer for filter checks
#[derive(Debug)]
pub struct FilterDebouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl FilterDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a timer that hands `text` to `on_elapsed` after the delay.
    /// Any timer that has not fired yet is aborted first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, text: String, on_elapsed: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed(text);
        });

        let mut pending = self.lock();
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the outstanding timer, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.lock().take() {
            previous.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for FilterDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_filter_state() {
        let mut state = FilterState::new();
        assert_eq!(state.query(), None);

        state.set_text("ab");
        assert!(state.is_settled("ab"));
        assert!(!state.is_settled("a"));
        assert_eq!(state.query(), Some("ab".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_schedule_aborts_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = FilterDebouncer::new(Duration::from_millis(500));

        let first = tx.clone();
        debouncer.schedule("a".to_string(), move |text| {
            let _ = first.send(text);
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let second = tx.clone();
        debouncer.schedule("ab".to_string(), move |text| {
            let _ = second.send(text);
        });
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(rx.try_recv().unwrap(), "ab");
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let debouncer = FilterDebouncer::new(Duration::from_millis(500));
        debouncer.schedule("salt".to_string(), move |text| {
            let _ = tx.send(text);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
