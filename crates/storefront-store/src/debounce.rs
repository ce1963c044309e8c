//! Trailing-edge debouncer for search input.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default quiet period before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Collapses a burst of submissions into one call with the latest value.
///
/// Each submission restarts the timer; the callback runs only once the input
/// has been quiet for the configured delay.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn a debouncer that invokes `callback` with the latest value after
    /// `delay` of quiet.
    pub fn new<F, Fut>(delay: Duration, mut callback: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            // A newer value restarts the quiet period.
                            Some(value) => latest = value,
                            None => {
                                callback(latest).await;
                                return;
                            }
                        },
                        _ = tokio::time::sleep(delay) => break,
                    }
                }
                callback(latest).await;
            }
        });
        Self { tx }
    }

    /// Submit a value, restarting the quiet period.
    pub fn submit(&self, value: T) {
        let _ = self.tx.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(String) -> std::future::Ready<()>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let callback = move |value: String| {
            sink.lock().unwrap().push(value);
            std::future::ready(())
        };
        (calls, callback)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_latest() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE, callback);

        debouncer.submit("l".to_string());
        debouncer.submit("la".to_string());
        debouncer.submit("lap".to_string());
        debouncer.submit("laptop".to_string());

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(calls.lock().unwrap().as_slice(), ["laptop"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_inside_window_keep_deferring() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE, callback);

        for (i, value) in ["p", "ph", "pho", "phon", "phone"].iter().enumerate() {
            debouncer.submit(value.to_string());
            if i < 4 {
                // Each keystroke lands inside the previous quiet period.
                tokio::time::sleep(Duration::from_millis(200)).await;
                assert!(calls.lock().unwrap().is_empty());
            }
        }

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(calls.lock().unwrap().as_slice(), ["phone"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE, callback);

        debouncer.submit("laptop".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.submit("phone".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(calls.lock().unwrap().as_slice(), ["laptop", "phone"]);
    }
}
