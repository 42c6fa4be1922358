//! Mock configurations for every showcased component kind.

mod button;
mod capsule;
mod code_clipboard;
mod progress_check;
mod tab_bar;
mod wallet;

pub use button::{ButtonData, ButtonStyle};
pub use capsule::{CapsuleData, CapsuleStyle};
pub use code_clipboard::{ClipboardState, CodeClipboardData, LABEL_CYCLE, SAMPLE_CODES};
pub use progress_check::{ProgressCheckData, ProgressStatus};
pub use tab_bar::{TabBarData, TabBarVariant, TabItem};
pub use wallet::{RANDOM_BALANCE_RANGE, WalletData};
