//! Cancellable quiet-period timer for search input

use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs an action once input has been quiet for `window`.
///
/// Scheduling again replaces the pending action; dropping the debouncer or
/// calling [`cancel`](Self::cancel) discards it.
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            action();
        }));
    }

    /// Abort the pending action. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn record(log: &Arc<Mutex<Vec<&'static str>>>, value: &'static str) -> impl FnOnce() + Send + 'static {
        let log = log.clone();
        move || log.lock().unwrap().push(value)
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_value_fires() {
        let log = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(record(&log, "r"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(record(&log, "ru"));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(record(&log, "rust"));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(log.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(*log.lock().unwrap(), vec!["rust"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_out_inputs_each_fire() {
        let log = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(record(&log, "first"));
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.schedule(record(&log, "second"));
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_action() {
        let log = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(record(&log, "stale"));
        assert!(debouncer.cancel());
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(log.lock().unwrap().is_empty());
        assert!(!debouncer.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_discards_pending_action() {
        let log = recorder();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(300));
            debouncer.schedule(record(&log, "unmounted"));
        }
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(log.lock().unwrap().is_empty());
    }
}
