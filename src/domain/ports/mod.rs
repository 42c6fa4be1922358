mod clipboard_port;
mod modal_port;
mod random_port;

pub use clipboard_port::ClipboardPort;
pub use modal_port::ModalPort;
pub use random_port::RandomPort;

#[cfg(test)]
pub mod mocks {
    pub use super::clipboard_port::mock::MockClipboard;
    pub use super::modal_port::mock::MockModal;
    pub use super::random_port::mock::MockRandom;
}
