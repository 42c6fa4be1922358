//! Observable mock state shared between a rendered unit and its interaction handlers.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::domain::errors::ConfigurationError;

/// Display configuration of a showcased component.
pub trait Configuration: Clone + fmt::Debug + 'static {
    /// Checks the component's structural invariants.
    ///
    /// # Errors
    /// Returns `ConfigurationError` describing the first violated invariant.
    fn validate(&self) -> Result<(), ConfigurationError>;
}

/// Handle returned by [`MockState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

type Subscriber<C> = Rc<dyn Fn(&C)>;

struct StateInner<C> {
    config: C,
    subscribers: Vec<(SubscriptionHandle, Subscriber<C>)>,
    next_subscription: u64,
    revision: u64,
}

/// Shared, observable configuration cell.
///
/// Cloning yields another handle to the same value. Updates replace the whole
/// configuration and notify subscribers synchronously, in subscription order.
pub struct MockState<C> {
    inner: Rc<RefCell<StateInner<C>>>,
}

impl<C> Clone for MockState<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for MockState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MockState")
            .field("config", &inner.config)
            .field("subscribers", &inner.subscribers.len())
            .field("revision", &inner.revision)
            .finish()
    }
}

impl<C: Clone + 'static> MockState<C> {
    /// Creates a state holding `config`.
    #[must_use]
    pub fn new(config: C) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner {
                config,
                subscribers: Vec::new(),
                next_subscription: 0,
                revision: 0,
            })),
        }
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn get(&self) -> C {
        self.inner.borrow().config.clone()
    }

    /// Reads the current configuration without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.borrow().config)
    }

    /// Replaces the configuration and notifies every subscriber.
    pub fn update(&self, config: C) {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            inner.config = config;
            inner.revision += 1;
            let subscribers: Vec<Subscriber<C>> = inner
                .subscribers
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect();
            (inner.config.clone(), subscribers)
        };

        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    /// Registers `callback` to run after every update.
    pub fn subscribe(&self, callback: impl Fn(&C) + 'static) -> SubscriptionHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = SubscriptionHandle(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push((handle, Rc::new(callback)));
        handle
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(h, _)| *h != handle);
        inner.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Number of updates applied since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Whether both handles point at the same state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: Configuration> MockState<C> {
    /// Creates a state after validating `config`.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `config` is invalid.
    pub fn try_new(config: C) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Validates `config` and applies it.
    ///
    /// On error the state is untouched and no subscriber runs.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `config` is invalid.
    pub fn try_update(&self, config: C) -> Result<(), ConfigurationError> {
        config.validate()?;
        self.update(config);
        Ok(())
    }
}
