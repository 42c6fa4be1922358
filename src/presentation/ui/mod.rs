//! UI screens.

mod app;
mod catalog_screen;
mod demo_screen;
mod demos;
mod help_popup;
mod notification_popup;

pub use app::App;
pub use catalog_screen::{CatalogEntry, CatalogScreen, ScreenKind, catalog};
pub use demo_screen::{Control, ControlAction, DemoScreen, GalleryScreen};
pub use demos::build_screen;
pub use help_popup::HelpPopup;
pub use notification_popup::NotificationPopup;
