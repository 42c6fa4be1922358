//! Gallery harness error types.

use thiserror::Error;

use super::registry::EntryId;

/// Harness misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The id does not belong to this harness's registry.
    #[error("no gallery slot for entry {0}")]
    SlotNotFound(EntryId),

    /// The slot exists but holds no unit.
    #[error("gallery slot for entry {0} is not mounted")]
    SlotNotMounted(EntryId),
}
