//! Maps interaction events to configuration changes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    ClipboardPort, Configuration, ConfigurationError, EventKind, InteractionEvent, MockState,
    ModalPort, Payload, RandomPort,
};

/// Platform side effects available to handlers.
#[derive(Clone)]
pub struct PlatformServices {
    /// Clipboard writer.
    pub clipboard: Arc<dyn ClipboardPort>,
    /// Modal alert presenter.
    pub modal: Arc<dyn ModalPort>,
    /// Random value source.
    pub random: Arc<dyn RandomPort>,
}

impl PlatformServices {
    /// Bundles the three services.
    #[must_use]
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        modal: Arc<dyn ModalPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            clipboard,
            modal,
            random,
        }
    }
}

impl fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformServices").finish_non_exhaustive()
    }
}

/// Computes the next configuration, or `None` when nothing changes.
pub type Handler<C> = Box<dyn Fn(&C, &Payload, &PlatformServices) -> Option<C>>;

/// Result of routing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The state received a new configuration.
    Updated,
    /// A handler ran and left the state alone.
    Unchanged,
    /// No handler for this kind.
    Ignored,
    /// The handler produced an invalid configuration. The state is untouched.
    Rejected(ConfigurationError),
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Ignored => write!(f, "ignored"),
            Self::Rejected(e) => write!(f, "rejected: {e}"),
        }
    }
}

/// Per-kind handler table for one component configuration.
pub struct InteractionRouter<C> {
    handlers: HashMap<EventKind, Handler<C>>,
    services: PlatformServices,
}

impl<C: Configuration> InteractionRouter<C> {
    /// Router without handlers.
    #[must_use]
    pub fn new(services: PlatformServices) -> Self {
        Self {
            handlers: HashMap::new(),
            services,
        }
    }

    /// Registers the handler for `kind`, replacing any previous one.
    #[must_use]
    pub fn on(
        mut self,
        kind: EventKind,
        handler: impl Fn(&C, &Payload, &PlatformServices) -> Option<C> + 'static,
    ) -> Self {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    /// Whether `kind` has a handler.
    #[must_use]
    pub fn handles(&self, kind: &EventKind) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Services handed to handlers.
    #[must_use]
    pub const fn services(&self) -> &PlatformServices {
        &self.services
    }

    /// Applies the handler for `event` to `target`.
    pub fn route(&self, event: &InteractionEvent, target: &MockState<C>) -> RouteOutcome {
        let Some(handler) = self.handlers.get(&event.kind) else {
            debug!(event = %event, "Ignoring interaction without handler");
            return RouteOutcome::Ignored;
        };

        let current = target.get();
        match handler(&current, &event.payload, &self.services) {
            Some(next) => match target.try_update(next) {
                Ok(()) => {
                    debug!(event = %event, revision = target.revision(), "Interaction applied");
                    RouteOutcome::Updated
                }
                Err(e) => {
                    warn!(event = %event, error = %e, "Interaction produced invalid configuration");
                    RouteOutcome::Rejected(e)
                }
            },
            None => RouteOutcome::Unchanged,
        }
    }
}

impl<C> fmt::Debug for InteractionRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(EventKind::name).collect();
        kinds.sort_unstable();
        f.debug_struct("InteractionRouter")
            .field("handlers", &kinds)
            .finish_non_exhaustive()
    }
}
