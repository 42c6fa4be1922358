//! Rendered unit contract and event plumbing.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::domain::InteractionEvent;

/// Receiver for events emitted by a unit.
pub type EventSink = Rc<dyn Fn(&InteractionEvent)>;

/// Identity of a rendered unit instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId(Uuid);

impl UnitId {
    /// Fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// On-screen component instance owned by a gallery slot.
pub trait RenderableUnit {
    /// Instance identity, stable for the unit's lifetime.
    fn id(&self) -> UnitId;

    /// Registers where emitted events go. Replaces any previous sink.
    fn attach_sink(&mut self, sink: EventSink);

    /// Emits `event` to the attached sink. Returns `false` when detached.
    fn emit(&self, event: &InteractionEvent) -> bool;

    /// Drops the sink and every state subscription.
    fn detach(&mut self);

    /// Whether a sink is attached.
    fn is_attached(&self) -> bool;
}

/// Shared emitter slot.
///
/// Clones are handles onto the same slot, so clearing it silences every
/// handle handed out before.
#[derive(Clone, Default)]
pub struct EventEmitter {
    sink: Rc<RefCell<Option<EventSink>>>,
}

impl EventEmitter {
    /// Emitter with nothing attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sink.
    pub fn attach(&self, sink: EventSink) {
        *self.sink.borrow_mut() = Some(sink);
    }

    /// Removes the sink.
    pub fn clear(&self) {
        self.sink.borrow_mut().take();
    }

    /// Whether a sink is set.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.sink.borrow().is_some()
    }

    /// Forwards `event` to the sink, if any.
    pub fn emit(&self, event: &InteractionEvent) -> bool {
        let sink = self.sink.borrow().clone();
        match sink {
            Some(sink) => {
                sink(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("attached", &self.is_attached())
            .finish()
    }
}
