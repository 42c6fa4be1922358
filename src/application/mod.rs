//! Application layer with the gallery harness, interaction routing and services.

/// Registry, harness and unit contract.
pub mod gallery;
/// Event-to-configuration routing.
pub mod router;
/// Per-component interaction tables.
pub mod routes;
/// Alert queue and observation log.
pub mod services;

pub use gallery::{EntryId, GalleryError, GalleryHarness, GalleryRegistry, RenderableUnit};
pub use router::{InteractionRouter, PlatformServices, RouteOutcome};
