use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{ModalPort, Notification, NotificationLevel};

/// FIFO of alerts; only the front one is on screen.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    /// Empty queue whose alerts last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues an alert behind the current one.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(notification);
    }

    /// Starts the front alert's timer and drops it once expired.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Drops the alert on screen, if any.
    pub fn dismiss(&mut self) -> bool {
        self.queue.pop_front().is_some()
    }

    /// Alert on screen, if any.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Whether any alert is queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}

/// Shared alert queue presenting modal requests from interaction handlers.
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    inner: Arc<Mutex<NotificationManager>>,
}

impl AlertQueue {
    /// Shared queue whose alerts last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotificationManager::new(default_duration))),
        }
    }

    /// Runs `f` with the queue locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut NotificationManager) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl ModalPort for AlertQueue {
    fn present(&self, level: NotificationLevel, title: &str, message: &str) {
        debug!(?level, title, "Presenting alert");
        self.inner.lock().notify(level, title, message);
    }
}
