//! Accent-derived color theme.

/// Color space conversion.
pub mod adapter;
mod service;

pub use service::Theme;
