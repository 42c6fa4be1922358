//! Clipboard port definition.

/// Port for writing to the system clipboard.
pub trait ClipboardPort: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&self, text: &str);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every write.
    #[derive(Default, Clone)]
    pub struct MockClipboard {
        pub writes: Arc<Mutex<Vec<String>>>,
    }

    impl MockClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<String> {
            self.writes.lock().unwrap().last().cloned()
        }
    }

    impl ClipboardPort for MockClipboard {
        fn write_text(&self, text: &str) {
            self.writes.lock().unwrap().push(text.to_string());
        }
    }
}
