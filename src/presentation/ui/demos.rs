//! Galleries and state controls for each catalog screen.

use crate::application::gallery::GalleryRegistry;
use crate::application::router::PlatformServices;
use crate::application::routes::{
    button_router, capsule_router, code_clipboard_router, progress_check_router, tab_bar_router,
    wallet_router,
};
use crate::domain::entities::{
    ButtonData, CapsuleData, CodeClipboardData, ProgressCheckData, TabBarData, TabBarVariant,
    WalletData,
};
use crate::domain::{EventKind, InteractionEvent, Payload};
use crate::infrastructure::config::UiConfig;
use crate::presentation::widgets::ComponentUnit;

use super::catalog_screen::ScreenKind;
use super::demo_screen::{Control, DemoScreen, GalleryScreen};

/// Builds a fresh screen. Nothing survives from a previous visit.
#[must_use]
pub fn build_screen(kind: ScreenKind, services: PlatformServices, ui: &UiConfig) -> Box<dyn GalleryScreen> {
    match kind {
        ScreenKind::CodeClipboard => Box::new(code_clipboard_screen(services, ui)),
        ScreenKind::Wallet => Box::new(wallet_screen(services, ui)),
        ScreenKind::TabBar => Box::new(tab_bar_screen(services, ui)),
        ScreenKind::Capsules => Box::new(capsules_screen(services, ui)),
        ScreenKind::Buttons => Box::new(buttons_screen(services, ui)),
        ScreenKind::ProgressCheck => Box::new(progress_check_screen(services, ui)),
    }
}

fn event(kind: EventKind) -> InteractionEvent {
    InteractionEvent::new(kind)
}

/// Copyable booking codes.
#[must_use]
pub fn code_clipboard_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<CodeClipboardData> {
    let mut registry = GalleryRegistry::new();
    registry.register_mock("Default", CodeClipboardData::default_mock(), ComponentUnit::new);
    registry.register_mock("Custom Code", CodeClipboardData::custom_code_mock(), ComponentUnit::new);
    registry.register_mock("Copied", CodeClipboardData::copied_mock(), ComponentUnit::new);
    registry.register_mock("Disabled", CodeClipboardData::disabled_mock(), ComponentUnit::new);
    let interactive =
        registry.register_mock("Interactive", CodeClipboardData::interactive_mock(), ComponentUnit::new);

    let controls = vec![
        Control::dispatch("Set Copied", interactive, InteractionEvent::selection(1)),
        Control::dispatch("Set Default", interactive, InteractionEvent::selection(0)),
        Control::dispatch("Toggle Enabled", interactive, event(EventKind::ToggleEnabled)),
        Control::dispatch("Random Code", interactive, event(EventKind::Randomize)),
        Control::dispatch("Change Label", interactive, InteractionEvent::custom("cycleLabel")),
        Control::dispatch("Simulate Copy", interactive, event(EventKind::CopyRequested)),
        Control::dispatch("Reset", interactive, event(EventKind::Reset)),
        Control::reveal("Show Interactive", interactive),
    ];

    DemoScreen::new(
        ScreenKind::CodeClipboard,
        registry,
        code_clipboard_router(services),
        controls,
        ui,
    )
}

/// Wallet balances and actions.
#[must_use]
pub fn wallet_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<WalletData> {
    let mut registry = GalleryRegistry::new();
    let default = registry.register_mock("Default", WalletData::default_mock(), ComponentUnit::new);
    registry.register_mock("Bonus", WalletData::bonus_mock(), ComponentUnit::new);
    let empty = registry.register_mock("Empty", WalletData::empty_mock(), ComponentUnit::new);
    registry.register_mock("Disabled", WalletData::disabled_mock(), ComponentUnit::new);

    let action = |name: &str| {
        InteractionEvent::new(EventKind::ActionRequested).with_payload(Payload::Text(name.to_string()))
    };
    let controls = vec![
        Control::dispatch("Randomize Balance", default, event(EventKind::BalanceUpdateRequested)),
        Control::dispatch("Deposit", default, action("deposit")),
        Control::dispatch("Withdraw", default, action("withdraw")),
        Control::dispatch("Withdraw From Empty", empty, action("withdraw")),
        Control::dispatch("Toggle Actions", default, event(EventKind::ToggleEnabled)),
        Control::dispatch("Reset", default, event(EventKind::Reset)),
    ];

    DemoScreen::new(ScreenKind::Wallet, registry, wallet_router(services), controls, ui)
}

/// The interactive slot is remounted for each `TabBarVariant`.
#[must_use]
pub fn tab_bar_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<TabBarData> {
    let mut registry = GalleryRegistry::new();
    registry.register_mock("Default", TabBarVariant::Default.config(), ComponentUnit::new);
    registry.register_mock("Complex", TabBarVariant::Complex.config(), ComponentUnit::new);
    registry.register_mock("Compact", TabBarVariant::Compact.config(), ComponentUnit::new);
    let interactive =
        registry.register_mock("Interactive", TabBarVariant::Default.config(), ComponentUnit::new);

    let mut controls: Vec<Control<TabBarData>> = TabBarVariant::ALL
        .into_iter()
        .map(|variant| Control::replace(variant.label(), interactive, move || variant.config()))
        .collect();
    controls.push(Control::dispatch("Select First Tab", interactive, InteractionEvent::selection(0)));
    controls.push(Control::dispatch("Select Third Tab", interactive, InteractionEvent::selection(2)));

    DemoScreen::new(ScreenKind::TabBar, registry, tab_bar_router(services), controls, ui)
}

/// Selectable pills.
#[must_use]
pub fn capsules_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<CapsuleData> {
    let mut registry = GalleryRegistry::new();
    let filled = registry.register_mock("Filled", CapsuleData::filled_mock(), ComponentUnit::new);
    let outlined = registry.register_mock("Outlined", CapsuleData::outlined_mock(), ComponentUnit::new);
    let subtle = registry.register_mock("Subtle", CapsuleData::subtle_mock(), ComponentUnit::new);

    let controls = vec![
        Control::dispatch("Toggle Filled", filled, InteractionEvent::selection(0)),
        Control::dispatch("Toggle Outlined", outlined, InteractionEvent::selection(0)),
        Control::dispatch("Toggle Subtle", subtle, InteractionEvent::selection(0)),
        Control::dispatch("Clear Filled", filled, event(EventKind::Reset)),
        Control::dispatch("Clear Outlined", outlined, event(EventKind::Reset)),
        Control::dispatch("Clear Subtle", subtle, event(EventKind::Reset)),
    ];

    DemoScreen::new(ScreenKind::Capsules, registry, capsule_router(services), controls, ui)
}

/// Button styles and presses.
#[must_use]
pub fn buttons_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<ButtonData> {
    let mut registry = GalleryRegistry::new();
    let solid = registry.register_mock("Solid", ButtonData::solid_mock(), ComponentUnit::new);
    let bordered = registry.register_mock("Bordered", ButtonData::bordered_mock(), ComponentUnit::new);
    registry.register_mock("Text", ButtonData::text_mock(), ComponentUnit::new);
    let disabled = registry.register_mock("Disabled", ButtonData::disabled_mock(), ComponentUnit::new);

    let controls = vec![
        Control::dispatch("Press Solid", solid, event(EventKind::ActionRequested)),
        Control::dispatch("Press Bordered", bordered, event(EventKind::ActionRequested)),
        Control::dispatch("Press Disabled", disabled, event(EventKind::ActionRequested)),
        Control::dispatch("Toggle Disabled", disabled, event(EventKind::ToggleEnabled)),
        Control::dispatch("Toggle Solid", solid, event(EventKind::ToggleEnabled)),
    ];

    DemoScreen::new(ScreenKind::Buttons, registry, button_router(services), controls, ui)
}

/// Segmented progress tasks.
#[must_use]
pub fn progress_check_screen(services: PlatformServices, ui: &UiConfig) -> DemoScreen<ProgressCheckData> {
    let mut registry = GalleryRegistry::new();
    let pending = registry.register_mock("Pending", ProgressCheckData::pending_mock(), ComponentUnit::new);
    let kyc = registry.register_mock("Incomplete", ProgressCheckData::kyc_mock(), ComponentUnit::new);
    registry.register_mock("Completed", ProgressCheckData::completed_mock(), ComponentUnit::new);
    registry.register_mock("Disabled", ProgressCheckData::disabled_mock(), ComponentUnit::new);

    let controls = vec![
        Control::dispatch("Advance", pending, event(EventKind::Advance)),
        Control::dispatch("Mark Completed", pending, event(EventKind::MarkCompleted)),
        Control::dispatch("Reset", pending, event(EventKind::Reset)),
        Control::dispatch("Toggle Enabled", pending, event(EventKind::ToggleEnabled)),
        Control::dispatch("Advance KYC", kyc, event(EventKind::Advance)),
    ];

    DemoScreen::new(
        ScreenKind::ProgressCheck,
        registry,
        progress_check_router(services),
        controls,
        ui,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::gallery::{RenderableUnit, SlotStatus};
    use crate::application::router::RouteOutcome;
    use crate::application::router::test_support::services;
    use crate::domain::entities::{ClipboardState, ProgressStatus};
    use crate::domain::NotificationLevel;
    use crate::presentation::events::EventResult;

    fn ui() -> UiConfig {
        UiConfig::default()
    }

    #[test]
    fn test_every_screen_mounts_all_slots() {
        for kind in ScreenKind::ALL {
            let screen = build_screen(kind, services().services, &ui());
            assert_eq!(screen.kind(), kind);
        }

        let screen = code_clipboard_screen(services().services, &ui());
        let labels: Vec<&str> = screen.harness().slots().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Default", "Custom Code", "Copied", "Disabled", "Interactive"]);
        assert!(screen.harness().slots().iter().all(|s| s.status() == SlotStatus::Mounted));
    }

    #[test]
    fn test_copy_control_writes_clipboard() {
        let svc = services();
        let mut screen = code_clipboard_screen(svc.services.clone(), &ui());

        assert_eq!(screen.run_control(5), EventResult::Consumed);

        let interactive = screen.harness().slots()[4].unit().unwrap().snapshot();
        assert_eq!(interactive.state, ClipboardState::Copied);
        assert_eq!(svc.clipboard.last(), Some("DEMO123".to_string()));
        let log = screen.log();
        let last = log.recent().next().unwrap();
        assert_eq!(last.label, "Interactive");
        assert_eq!(last.outcome, RouteOutcome::Updated);
    }

    #[test]
    fn test_missing_control_is_not_consumed() {
        let mut screen = buttons_screen(services().services, &ui());
        assert_eq!(screen.run_control(42), EventResult::Continue);
    }

    #[test]
    fn test_variant_swap_keeps_other_slots() {
        let mut screen = tab_bar_screen(services().services, &ui());
        let before = screen.harness().unit_ids();

        screen.run_control(1);

        let after = screen.harness().unit_ids();
        assert_eq!(before[..3], after[..3]);
        assert_ne!(before[3], after[3]);
        let slot = &screen.harness().slots()[3];
        assert_eq!(slot.unit().unwrap().snapshot(), TabBarData::complex_mock());
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn test_invalid_selection_alerts_and_keeps_state() {
        let svc = services();
        let mut screen = tab_bar_screen(svc.services.clone(), &ui());
        screen.run_control(2);

        screen.run_control(4);

        let slot = &screen.harness().slots()[3];
        assert_eq!(slot.state().unwrap().get(), TabBarData::compact_mock());
        let presented = svc.modal.presented.lock().unwrap();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, NotificationLevel::Error);
        assert!(matches!(
            screen.log().recent().next().unwrap().outcome,
            RouteOutcome::Rejected(_)
        ));
    }

    #[test]
    fn test_focused_component_receives_keys() {
        let mut screen = progress_check_screen(services().services, &ui());

        screen.press_focused(crossterm::event::KeyCode::Enter);

        let status = screen.harness().slots()[0].state().unwrap().get().status;
        assert!(matches!(status, ProgressStatus::Incomplete { completed: 1, .. }));
    }

    #[test]
    fn test_dropping_screen_releases_states() {
        let screen = wallet_screen(services().services, &ui());
        let state = screen.harness().slots()[0].state().unwrap().clone();
        let emitter = screen.harness().slots()[0].unit().unwrap().emitter();
        assert_eq!(state.subscriber_count(), 1);

        drop(screen);

        assert_eq!(state.subscriber_count(), 0);
        assert!(!emitter.emit(&InteractionEvent::new(EventKind::Reset)));
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_stale_unit_is_silent_after_swap() {
        let mut screen = tab_bar_screen(services().services, &ui());
        let old_state = screen.harness().slots()[3].state().unwrap().clone();
        let stale = screen.harness().slots()[3].unit().unwrap().emitter();

        screen.run_control(2);

        assert!(!stale.emit(&InteractionEvent::selection(1)));
        assert_eq!(old_state.get(), TabBarData::default_mock());
        assert!(screen.harness().slots()[3].unit().unwrap().is_attached());
    }
}
