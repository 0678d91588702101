use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pending search input with a cancellable delayed commit: each new input
/// cancels the previous in-flight commit, so only the last value within the
/// debounce window reaches subscribers.
pub struct DebouncedSearch {
    delay: Duration,
    tx: watch::Sender<String>,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { delay, tx, pending: None }
    }

    /// Committed-value channel; receivers see a change only when a commit
    /// fires.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Record a keystroke. The commit is scheduled `delay` from now and is
    /// cancelled if another input arrives first.
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let tx = self.tx.clone();
        let delay = self.delay;
        let text = text.into();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(text);
        }));
    }

    pub fn committed(&self) -> String {
        self.tx.borrow().clone()
    }
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for DebouncedSearch {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_input_commits() {
        let mut search = DebouncedSearch::default();
        let mut rx = search.subscribe();

        search.input("b");
        search.input("bi");
        search.input("bit");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "bit");
        assert_eq!(search.committed(), "bit");

        // nothing else pending
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_inputs_commit_separately() {
        let mut search = DebouncedSearch::new(Duration::from_millis(50));
        let mut rx = search.subscribe();

        search.input("btc");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "btc");

        search.input("eth");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "eth");
    }
}
