use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{DueReminder, Notifier, ReminderWindow, NOTIFICATION_TITLE};
use crate::clock::Clock;
use crate::store::StoreError;
use crate::tracker::Tracker;

/// Runs one reminder check and announces whatever became due.
pub fn check_and_notify<C: Clock>(
    tracker: &mut Tracker<C>,
    notifier: &dyn Notifier,
    window: ReminderWindow,
) -> Result<Vec<DueReminder>, StoreError> {
    let due = tracker.check_reminders(window)?;
    for item in &due {
        notifier.notify(NOTIFICATION_TITLE, &item.notification_body());
    }
    Ok(due)
}

/// Background reminder check, started once and stopped on shutdown.
///
/// The first check runs as soon as the task starts, then once per interval.
pub struct ReminderTask {
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ReminderTask {
    pub fn start<C>(
        tracker: Arc<Mutex<Tracker<C>>>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        window: ReminderWindow,
    ) -> Self
    where
        C: Clock + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let tracker = Arc::clone(&tracker);
                        let notifier = Arc::clone(&notifier);
                        // File I/O and the tracker lock stay off the async workers
                        let tick = tokio::task::spawn_blocking(move || {
                            run_tick(&tracker, notifier.as_ref(), window)
                        });
                        if let Err(e) = tick.await {
                            tracing::error!("Reminder check panicked: {}", e);
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("Reminder task received shutdown signal");
                        break;
                    }
                }
            }
        });

        tracing::info!(
            "Reminder checks every {}s, window {} min",
            interval.as_secs(),
            window.as_minutes()
        );

        Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Signals the task and waits for the current check to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Reminder task ended abnormally: {}", e);
            }
        }
    }
}

fn run_tick<C: Clock>(
    tracker: &Mutex<Tracker<C>>,
    notifier: &dyn Notifier,
    window: ReminderWindow,
) {
    let mut guard = tracker.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = check_and_notify(&mut guard, notifier, window) {
        tracing::error!("Reminder check failed: {}", e);
    }
}

impl Drop for ReminderTask {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            if let Err(e) = tx.try_send(()) {
                tracing::debug!(
                    error = ?e,
                    "Reminder shutdown signal send failed (task likely finished)"
                );
            }
        }
    }
}
