use std::sync::Arc;

use arboard::Clipboard;
use tracing::{debug, error, warn};

use crate::domain::ClipboardPort;

type Writer = Arc<dyn Fn(String) + Send + Sync>;

/// System clipboard adapter. Writes run on tokio's blocking pool when a
/// runtime is available.
#[derive(Clone)]
pub struct ClipboardService {
    writer: Writer,
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardService {
    /// Writes through arboard.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Self::write_blocking)
    }

    /// Uses `writer` in place of arboard.
    #[must_use]
    pub fn with_writer(writer: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self {
            writer: Arc::new(writer),
        }
    }

    fn write_blocking(text: String) {
        match Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    error!("Failed to set clipboard text: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
            }
        }
    }

    /// Writes `text`, logging failures.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let writer = Arc::clone(&self.writer);
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn_blocking(move || writer(text));
        } else {
            debug!("No runtime available, writing clipboard inline");
            writer(text);
        }
    }
}

impl ClipboardPort for ClipboardService {
    fn write_text(&self, text: &str) {
        self.set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_write_without_runtime_is_inline() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);
        let service = ClipboardService::with_writer(move |text| sink.lock().unwrap().push(text));

        let port: &dyn ClipboardPort = &service;
        port.write_text("DEMO123");
        port.write_text("GHI012");

        assert_eq!(*written.lock().unwrap(), vec!["DEMO123", "GHI012"]);
    }

    #[tokio::test]
    async fn test_write_inside_runtime_goes_to_blocking_pool() {
        let (tx, rx) = std::sync::mpsc::channel();
        let service = ClipboardService::with_writer(move |text| {
            let _ = tx.send(text);
        });

        service.set_text("ABC789");

        let received = tokio::task::spawn_blocking(move || rx.recv_timeout(std::time::Duration::from_secs(5)))
            .await
            .unwrap();
        assert_eq!(received.unwrap(), "ABC789");
    }
}
