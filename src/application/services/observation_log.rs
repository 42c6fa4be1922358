//! Recent routed interactions for the "State Observation" panel.

use std::collections::VecDeque;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::application::gallery::EntryId;
use crate::application::router::RouteOutcome;
use crate::domain::InteractionEvent;

/// Timestamp format used when a configured one does not parse.
pub const FALLBACK_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Whether chrono can render `format` without failing.
#[must_use]
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// One routed interaction.
#[derive(Debug, Clone)]
pub struct Observation {
    /// When it was routed.
    pub at: DateTime<Local>,
    /// Slot label.
    pub label: String,
    /// Target slot.
    pub entry: EntryId,
    /// Event as emitted.
    pub event: InteractionEvent,
    /// What the router did.
    pub outcome: RouteOutcome,
}

impl Observation {
    /// Single line for the panel, timestamp formatted with `format`.
    #[must_use]
    pub fn render_line(&self, format: &str) -> String {
        let format = if is_valid_timestamp_format(format) {
            format
        } else {
            FALLBACK_TIMESTAMP_FORMAT
        };
        format!(
            "{} {} · {} → {}",
            self.at.format(format),
            self.label,
            self.event,
            self.outcome
        )
    }
}

/// Bounded log, newest last.
#[derive(Debug, Clone)]
pub struct ObservationLog {
    entries: VecDeque<Observation>,
    capacity: usize,
}

impl ObservationLog {
    /// Log keeping at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Appends an observation, evicting the oldest when full.
    pub fn record(
        &mut self,
        entry: EntryId,
        label: impl Into<String>,
        event: &InteractionEvent,
        outcome: RouteOutcome,
    ) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Observation {
            at: Local::now(),
            label: label.into(),
            entry,
            event: event.clone(),
            outcome,
        });
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &Observation> {
        self.entries.iter().rev()
    }

    /// Number of kept observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gallery::GalleryRegistry;
    use crate::domain::EventKind;

    fn entry() -> EntryId {
        let mut registry: GalleryRegistry<u8, u8> = GalleryRegistry::new();
        registry.register_mock("x", 0, |_| 0)
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = ObservationLog::new(2);
        for index in 0..3 {
            log.record(entry(), "Tabs", &InteractionEvent::selection(index), RouteOutcome::Updated);
        }

        let events: Vec<String> = log.recent().map(|o| o.event.to_string()).collect();
        assert_eq!(events, vec!["selection #2", "selection #1"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_render_line() {
        let mut log = ObservationLog::new(4);
        log.record(
            entry(),
            "Interactive",
            &InteractionEvent::new(EventKind::CopyRequested),
            RouteOutcome::Ignored,
        );

        let line = log.recent().next().unwrap().render_line("%H");
        assert!(line.ends_with("Interactive · copyRequested → ignored"));
    }

    #[test]
    fn test_unknown_specifier_falls_back() {
        assert!(is_valid_timestamp_format("%H:%M"));
        assert!(!is_valid_timestamp_format("%H:%M %Q"));

        let mut log = ObservationLog::new(1);
        log.record(entry(), "Pending", &InteractionEvent::new(EventKind::Advance), RouteOutcome::Updated);

        let line = log.recent().next().unwrap().render_line("%H:%M %Q");
        assert!(line.ends_with("Pending · advance → updated"));
        assert_eq!(line.split(' ').next().map(str::len), Some(8));
    }
}
