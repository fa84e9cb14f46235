use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces rapid-fire triggers into one execution after a quiet period.
///
/// Each `call` cancels any invocation still waiting out its quiet window,
/// so a burst of triggers runs only the last one. A superseded invocation
/// is aborted before it fires; there is no finer-grained cancellation.
pub struct Debouncer {
    quiet: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `task` to run after the quiet period, superseding any
    /// pending invocation. Must be called from within a tokio runtime.
    pub fn call<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let quiet = self.quiet;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            task.await;
        }));
    }

    /// Abort the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
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
    use std::sync::Arc;
    use std::sync::Mutex as StdMutex;

    #[tokio::test(start_paused = true)]
    async fn rapid_calls_coalesce_into_the_last_one() {
        let fired: Arc<StdMutex<Vec<String>>> = Arc::default();
        let debouncer = Debouncer::new(Duration::from_millis(300));

        for query in ["a", "ap", "app"] {
            let fired = fired.clone();
            let query = query.to_string();
            debouncer.call(async move {
                fired.lock().unwrap().push(query);
            });
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["app".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_calls_each_fire() {
        let fired: Arc<StdMutex<Vec<String>>> = Arc::default();
        let debouncer = Debouncer::new(Duration::from_millis(300));

        for query in ["first", "second"] {
            let fired = fired.clone();
            let query = query.to_string();
            debouncer.call(async move {
                fired.lock().unwrap().push(query);
            });
            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        let fired = fired.lock().unwrap();
        assert_eq!(*fired, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_invocation() {
        let fired: Arc<StdMutex<Vec<String>>> = Arc::default();
        let debouncer = Debouncer::new(Duration::from_millis(300));

        {
            let fired = fired.clone();
            debouncer.call(async move {
                fired.lock().unwrap().push("never".to_string());
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(fired.lock().unwrap().is_empty());
    }
}
