use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Emits `AppEvent::Tick` every second while a rate-limit cooldown is active.
#[derive(Default)]
pub struct Countdown {
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Starts or stops the ticker so that it runs exactly while `active`.
    pub fn sync(&mut self, active: bool, tx: &mpsc::UnboundedSender<AppEvent>) {
        if active {
            if !self.is_running() {
                let tx = tx.clone();
                self.task = Some(tokio::spawn(tick_every_second(tx)));
            }
        } else {
            self.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick_every_second(tx: mpsc::UnboundedSender<AppEvent>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;

    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}
