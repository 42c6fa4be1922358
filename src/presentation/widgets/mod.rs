mod component_unit;
pub(crate) mod components;
mod footer_bar;
mod gallery_view;
mod header_bar;
mod observation_panel;

pub use component_unit::{ComponentUnit, ComponentView};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use gallery_view::{GalleryView, TerminalHarness, fitting_slots, reveal_focus};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use observation_panel::ObservationPanel;
