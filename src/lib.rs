//! Mockgallery - a terminal gallery of UI components driven by mock view models.
//!
//! Each screen registers named mock configurations, mounts one rendered unit per
//! configuration and routes the units' interaction events back into their
//! observable state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the gallery harness and interaction routing.
pub mod application;
/// Domain layer containing mock configurations, observable state and ports.
pub mod domain;
/// Infrastructure layer containing platform adapters and configuration.
pub mod infrastructure;
/// Presentation layer containing screens, widgets and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mockgallery";
