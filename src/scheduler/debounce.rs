use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delays search-on-type until the query has been quiet for `delay`.
/// Each new keystroke aborts the pending task and schedules a fresh one.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, query: String, tx: &mpsc::UnboundedSender<AppEvent>) {
        self.cancel();
        let tx = tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::SearchDue(query));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
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

    fn due_query(event: AppEvent) -> String {
        match event {
            AppEvent::SearchDue(q) => q,
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_keystroke_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        debouncer.schedule("oc".to_string(), &tx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("oct".to_string(), &tx);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule("octo".to_string(), &tx);

        let first = rx.recv().await.unwrap();
        assert_eq!(due_query(first), "octo");

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_pending_search() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        debouncer.schedule("octo".to_string(), &tx);
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
