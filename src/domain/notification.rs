//! Timed alerts shown over the gallery.

use std::time::{Duration, Instant};

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// Confirmation of a completed action.
    Success,
    /// Refused or degraded action.
    Warn,
    /// Harness misuse or platform failure.
    Error,
}

/// Alert queued for display.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub message: String,
    /// First frame it was drawn in.
    pub displayed_at: Option<Instant>,
    /// Time on screen.
    pub duration: Duration,
}

impl Notification {
    /// Creates an alert shown for five seconds.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    /// Overrides the display time.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether it has been on screen longer than its duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the display clock once.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}
