//! Interaction events emitted by rendered components.

use std::fmt;

/// Kind of interaction a component reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An item inside the component was picked.
    Selection,
    /// The user asked to copy the component's value.
    CopyRequested,
    /// Enabled/disabled flip.
    ToggleEnabled,
    /// The displayed balance should be refreshed.
    BalanceUpdateRequested,
    /// A tracked task finished.
    MarkCompleted,
    /// A tracked task moved one step forward.
    Advance,
    /// A primary action (button press, deposit) was requested.
    ActionRequested,
    /// Replace displayed values with random ones.
    Randomize,
    /// Restore the component's initial look.
    Reset,
    /// Anything the built-in kinds do not cover.
    Custom(String),
}

impl EventKind {
    /// Stable name used in logs and the observation panel.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Selection => "selection",
            Self::CopyRequested => "copyRequested",
            Self::ToggleEnabled => "toggleEnabled",
            Self::BalanceUpdateRequested => "balanceUpdateRequested",
            Self::MarkCompleted => "markCompleted",
            Self::Advance => "advance",
            Self::ActionRequested => "actionRequested",
            Self::Randomize => "randomize",
            Self::Reset => "reset",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data carried by an interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No data.
    #[default]
    None,
    /// Position of the picked item.
    Index(usize),
    /// Free text.
    Text(String),
    /// Monetary or numeric amount.
    Amount(f64),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Index(index) => write!(f, "#{index}"),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Amount(amount) => write!(f, "{amount:.2}"),
        }
    }
}

/// A single interaction routed from a unit to its state.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    /// What happened.
    pub kind: EventKind,
    /// Accompanying data.
    pub payload: Payload,
}

impl InteractionEvent {
    /// Creates an event without payload.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: Payload::None,
        }
    }

    /// Attaches a payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Selection of the item at `index`.
    #[must_use]
    pub fn selection(index: usize) -> Self {
        Self::new(EventKind::Selection).with_payload(Payload::Index(index))
    }

    /// Event of a kind outside the built-in set.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(EventKind::Custom(name.into()))
    }
}

impl fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::None => write!(f, "{}", self.kind),
            ref payload => write!(f, "{} {payload}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(InteractionEvent::selection(2).to_string(), "selection #2");
        assert_eq!(
            InteractionEvent::new(EventKind::CopyRequested).to_string(),
            "copyRequested"
        );
        assert_eq!(
            InteractionEvent::new(EventKind::BalanceUpdateRequested)
                .with_payload(Payload::Amount(12.5))
                .to_string(),
            "balanceUpdateRequested 12.50"
        );
    }

    #[test]
    fn test_custom_kind_name() {
        let event = InteractionEvent::custom("swipe");
        assert_eq!(event.kind.name(), "swipe");
        assert_ne!(event.kind, EventKind::Selection);
    }
}
