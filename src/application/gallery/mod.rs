//! Declarative component gallery: registry, harness and unit contract.

mod error;
mod harness;
mod registry;
mod unit;

pub use error::GalleryError;
pub use harness::{GalleryHarness, InteractionCallback, Slot, SlotStatus};
pub use registry::{ComponentEntry, EntryId, GalleryRegistry, RenderFactory, StateFactory};
pub use unit::{EventEmitter, EventSink, RenderableUnit, UnitId};
