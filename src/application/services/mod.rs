/// Queued alerts.
pub mod notification_manager;
/// Routed-event history.
pub mod observation_log;

pub use notification_manager::{AlertQueue, NotificationManager};
pub use observation_log::{
    FALLBACK_TIMESTAMP_FORMAT, Observation, ObservationLog, is_valid_timestamp_format,
};
