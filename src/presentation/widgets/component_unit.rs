//! Terminal rendition of a gallery unit.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crossterm::event::KeyCode;
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::trace;

use crate::application::gallery::{EventEmitter, EventSink, RenderableUnit, UnitId};
use crate::domain::{Configuration, InteractionEvent, MockState, SubscriptionHandle};
use crate::presentation::theme::Theme;

/// How a configuration draws itself and reacts to keys.
pub trait ComponentView: Configuration {
    /// Rows needed to draw the component, borders excluded.
    fn height(&self) -> u16;

    /// Draws the component into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Event emitted when `key` reaches the focused component.
    fn interaction(&self, key: KeyCode) -> Option<InteractionEvent>;

    /// `field: value` lines for the observation panel.
    fn summary(&self) -> Vec<String>;
}

/// A mounted component following its [`MockState`].
///
/// The unit keeps a snapshot refreshed by a state subscription and emits
/// events through an [`EventEmitter`]. Detaching drops both.
pub struct ComponentUnit<C> {
    id: UnitId,
    state: MockState<C>,
    snapshot: Rc<RefCell<C>>,
    subscription: Option<SubscriptionHandle>,
    emitter: EventEmitter,
}

impl<C: ComponentView> ComponentUnit<C> {
    /// Builds a unit showing `state` and subscribes to its updates.
    #[must_use]
    pub fn new(state: &MockState<C>) -> Self {
        let snapshot = Rc::new(RefCell::new(state.get()));
        let follower = Rc::clone(&snapshot);
        let subscription = state.subscribe(move |config: &C| {
            *follower.borrow_mut() = config.clone();
        });

        Self {
            id: UnitId::new(),
            state: state.clone(),
            snapshot,
            subscription: Some(subscription),
            emitter: EventEmitter::new(),
        }
    }

    /// Configuration currently displayed.
    #[must_use]
    pub fn snapshot(&self) -> C {
        self.snapshot.borrow().clone()
    }

    /// Handle onto the unit's emitter. It goes silent once the unit detaches.
    #[must_use]
    pub fn emitter(&self) -> EventEmitter {
        self.emitter.clone()
    }

    /// Translates `key` into an event and emits it.
    ///
    /// Returns the emitted event, or `None` when the key means nothing to the
    /// component or the unit is detached.
    pub fn press(&self, key: KeyCode) -> Option<InteractionEvent> {
        let event = self.snapshot.borrow().interaction(key)?;
        self.emitter.emit(&event).then_some(event)
    }

    /// Rows needed including the slot border.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.snapshot.borrow().height().saturating_add(2)
    }

    /// Draws the current snapshot.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.snapshot.borrow().render(area, buf, theme);
    }

    /// Field lines for the observation panel.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        self.snapshot.borrow().summary()
    }
}

impl<C: ComponentView> RenderableUnit for ComponentUnit<C> {
    fn id(&self) -> UnitId {
        self.id
    }

    fn attach_sink(&mut self, sink: EventSink) {
        self.emitter.attach(sink);
    }

    fn emit(&self, event: &InteractionEvent) -> bool {
        self.emitter.emit(event)
    }

    fn detach(&mut self) {
        if let Some(handle) = self.subscription.take() {
            self.state.unsubscribe(handle);
        }
        self.emitter.clear();
        trace!(unit = %self.id, "Unit detached");
    }

    fn is_attached(&self) -> bool {
        self.emitter.is_attached()
    }
}

impl<C> fmt::Debug for ComponentUnit<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentUnit")
            .field("id", &self.id)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;
    use crate::domain::entities::{CapsuleData, ProgressCheckData, ProgressStatus};
    use std::cell::Cell;

    #[test]
    fn test_unit_follows_state() {
        let state = MockState::new(ProgressCheckData::pending_mock());
        let unit = ComponentUnit::new(&state);

        state.update(ProgressCheckData::completed_mock());

        assert_eq!(unit.snapshot().status, ProgressStatus::Completed);
    }

    #[test]
    fn test_detach_unsubscribes_and_silences() {
        let state = MockState::new(CapsuleData::filled_mock());
        let mut unit = ComponentUnit::new(&state);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        unit.attach_sink(Rc::new(move |_| counter.set(counter.get() + 1)));
        let stale = unit.emitter();

        assert_eq!(state.subscriber_count(), 1);
        assert!(unit.press(KeyCode::Enter).is_some());

        unit.detach();

        assert_eq!(state.subscriber_count(), 0);
        assert!(!unit.is_attached());
        assert!(unit.press(KeyCode::Enter).is_none());
        assert!(!stale.emit(&InteractionEvent::new(EventKind::Reset)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unmapped_key_emits_nothing() {
        let state = MockState::new(CapsuleData::filled_mock());
        let mut unit = ComponentUnit::new(&state);
        unit.attach_sink(Rc::new(|_| panic!("nothing should be emitted")));

        assert!(unit.press(KeyCode::Char('x')).is_none());
    }
}
