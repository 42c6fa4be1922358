//! Domain layer with mock configurations, observable state and port definitions.

/// Mock component configurations.
pub mod entities;
/// Error types.
pub mod errors;
/// Interaction event definitions.
pub mod interaction;
/// Keybinding definitions.
pub mod keybinding;
/// Alert definitions.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Observable mock state.
pub mod state;

pub use errors::ConfigurationError;
pub use interaction::{EventKind, InteractionEvent, Payload};
pub use notification::{Notification, NotificationLevel};
pub use ports::{ClipboardPort, ModalPort, RandomPort};
pub use state::{Configuration, MockState, SubscriptionHandle};
