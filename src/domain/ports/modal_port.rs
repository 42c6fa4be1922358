//! Modal presentation port definition.

use crate::domain::NotificationLevel;

/// Port for presenting modal alerts.
pub trait ModalPort: Send + Sync {
    /// Presents an alert with `title` and `message`.
    fn present(&self, level: NotificationLevel, title: &str, message: &str);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    pub struct MockModal {
        pub presented: Arc<Mutex<Vec<(NotificationLevel, String, String)>>>,
    }

    impl MockModal {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn titles(&self) -> Vec<String> {
            self.presented
                .lock()
                .unwrap()
                .iter()
                .map(|(_, title, _)| title.clone())
                .collect()
        }
    }

    impl ModalPort for MockModal {
        fn present(&self, level: NotificationLevel, title: &str, message: &str) {
            self.presented
                .lock()
                .unwrap()
                .push((level, title.to_string(), message.to_string()));
        }
    }
}
