//! Interaction tables for each showcased component kind.

use tracing::info;

use super::router::{InteractionRouter, PlatformServices};
use crate::domain::entities::{
    ButtonData, CapsuleData, ClipboardState, CodeClipboardData, ProgressCheckData,
    ProgressStatus, RANDOM_BALANCE_RANGE, SAMPLE_CODES, TabBarData, WalletData,
};
use crate::domain::{EventKind, NotificationLevel, Payload};

/// Segments used when a pending task starts advancing.
pub const DEFAULT_PROGRESS_SEGMENTS: u32 = 4;

/// Copy, toggle, random code and label cycling.
#[must_use]
pub fn code_clipboard_router(services: PlatformServices) -> InteractionRouter<CodeClipboardData> {
    InteractionRouter::<CodeClipboardData>::new(services)
        .on(EventKind::CopyRequested, |current, _, services| {
            if !current.is_enabled {
                return None;
            }
            services.clipboard.write_text(&current.code);
            info!(code = %current.code, "Code copied");
            Some(current.clone().with_state(ClipboardState::Copied))
        })
        .on(EventKind::ToggleEnabled, |current, _, _| {
            Some(current.clone().enabled(!current.is_enabled))
        })
        .on(EventKind::Selection, |current, payload, _| {
            let state = match payload {
                Payload::Index(0) => ClipboardState::Default,
                Payload::Index(_) => ClipboardState::Copied,
                _ => return None,
            };
            (state != current.state).then(|| current.clone().with_state(state))
        })
        .on(EventKind::Randomize, |current, _, services| {
            let code = SAMPLE_CODES[services.random.index(SAMPLE_CODES.len())];
            Some(current.clone().with_code(code))
        })
        .on(EventKind::Custom("cycleLabel".to_string()), |current, _, _| {
            let mut next = current.clone();
            next.label_text = current.next_label().to_string();
            Some(next)
        })
        .on(EventKind::Reset, |_, _, _| {
            Some(CodeClipboardData::interactive_mock())
        })
}

/// Random balance, deposit and withdraw alerts.
#[must_use]
pub fn wallet_router(services: PlatformServices) -> InteractionRouter<WalletData> {
    InteractionRouter::<WalletData>::new(services)
        .on(EventKind::BalanceUpdateRequested, |current, payload, services| {
            let balance = match payload {
                Payload::Amount(amount) => *amount,
                _ => {
                    let (min, max) = RANDOM_BALANCE_RANGE;
                    (services.random.amount(min, max) * 100.0).round() / 100.0
                }
            };
            Some(current.clone().with_balance(balance))
        })
        .on(EventKind::ActionRequested, |current, payload, services| {
            if !current.actions_enabled {
                services.modal.present(
                    NotificationLevel::Warn,
                    &current.title,
                    "Wallet actions are disabled",
                );
                return None;
            }
            match payload {
                Payload::Text(action) if action == "withdraw" => {
                    if current.balance <= 0.0 {
                        services.modal.present(
                            NotificationLevel::Warn,
                            "Withdraw",
                            "Nothing to withdraw",
                        );
                    } else {
                        services.modal.present(
                            NotificationLevel::Info,
                            "Withdraw",
                            &format!("Withdraw up to {}", current.format_amount(current.balance)),
                        );
                    }
                }
                _ => services.modal.present(
                    NotificationLevel::Info,
                    "Deposit",
                    &format!("Deposit into {}", current.title),
                ),
            }
            None
        })
        .on(EventKind::ToggleEnabled, |current, _, _| {
            let mut next = current.clone();
            next.actions_enabled = !current.actions_enabled;
            Some(next)
        })
        .on(EventKind::Reset, |_, _, _| Some(WalletData::default_mock()))
}

/// Tab selection.
#[must_use]
pub fn tab_bar_router(services: PlatformServices) -> InteractionRouter<TabBarData> {
    InteractionRouter::<TabBarData>::new(services).on(EventKind::Selection, |current, payload, _| {
        let Payload::Index(index) = payload else {
            return None;
        };
        (*index != current.selected).then(|| current.clone().select(*index))
    })
}

/// Capsule selection.
#[must_use]
pub fn capsule_router(services: PlatformServices) -> InteractionRouter<CapsuleData> {
    InteractionRouter::<CapsuleData>::new(services)
        .on(EventKind::Selection, |current, _, _| Some(current.clone().toggled()))
        .on(EventKind::Reset, |current, _, _| {
            current.is_selected.then(|| current.clone().toggled())
        })
}

/// Button press alerts and enable toggling.
#[must_use]
pub fn button_router(services: PlatformServices) -> InteractionRouter<ButtonData> {
    InteractionRouter::<ButtonData>::new(services)
        .on(EventKind::ActionRequested, |current, _, services| {
            if current.is_enabled {
                services.modal.present(
                    NotificationLevel::Success,
                    &current.title,
                    "Button tapped",
                );
            }
            None
        })
        .on(EventKind::ToggleEnabled, |current, _, _| Some(current.clone().toggled()))
}

/// Progress advancing, completion and reset.
#[must_use]
pub fn progress_check_router(services: PlatformServices) -> InteractionRouter<ProgressCheckData> {
    InteractionRouter::<ProgressCheckData>::new(services)
        .on(EventKind::Advance, |current, _, _| {
            if !current.is_enabled {
                return None;
            }
            let status = current.advanced(DEFAULT_PROGRESS_SEGMENTS);
            (status != current.status).then(|| current.clone().with_status(status))
        })
        .on(EventKind::MarkCompleted, |current, _, services| {
            if current.status == ProgressStatus::Completed {
                return None;
            }
            services.modal.present(NotificationLevel::Success, &current.title, "Completed");
            Some(current.clone().with_status(ProgressStatus::Completed))
        })
        .on(EventKind::Reset, |current, _, _| {
            Some(current.clone().with_status(ProgressStatus::Pending))
        })
        .on(EventKind::ToggleEnabled, |current, _, _| {
            let mut next = current.clone();
            next.is_enabled = !current.is_enabled;
            Some(next)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::router::RouteOutcome;
    use crate::application::router::test_support::{services, services_with_random};
    use crate::domain::ports::mocks::MockRandom;
    use crate::domain::{InteractionEvent, MockState};

    #[test]
    fn test_copy_writes_clipboard_and_marks_copied() {
        let svc = services();
        let router = code_clipboard_router(svc.services.clone());
        let state = MockState::new(CodeClipboardData::interactive_mock());

        let outcome = router.route(&InteractionEvent::new(EventKind::CopyRequested), &state);

        assert_eq!(outcome, RouteOutcome::Updated);
        assert!(state.get().is_copied());
        assert_eq!(svc.clipboard.last(), Some("DEMO123".to_string()));
    }

    #[test]
    fn test_disabled_code_does_not_copy() {
        let svc = services();
        let router = code_clipboard_router(svc.services.clone());
        let state = MockState::new(CodeClipboardData::disabled_mock());

        let outcome = router.route(&InteractionEvent::new(EventKind::CopyRequested), &state);

        assert_eq!(outcome, RouteOutcome::Unchanged);
        assert!(svc.clipboard.last().is_none());
    }

    #[test]
    fn test_random_code_uses_random_port() {
        let svc = services_with_random(MockRandom::new(vec![3], vec![]));
        let router = code_clipboard_router(svc.services.clone());
        let state = MockState::new(CodeClipboardData::copied_mock());

        router.route(&InteractionEvent::new(EventKind::Randomize), &state);

        assert_eq!(state.get().code, "GHI012");
        assert!(!state.get().is_copied());
    }

    #[test]
    fn test_cycle_label() {
        let router = code_clipboard_router(services().services);
        let state = MockState::new(CodeClipboardData::default_mock());

        router.route(&InteractionEvent::custom("cycleLabel"), &state);
        assert_eq!(state.get().label_text, "Copy Reference");
    }

    #[test]
    fn test_randomize_balance_rounds_to_cents() {
        let svc = services_with_random(MockRandom::new(vec![], vec![1234.5678]));
        let router = wallet_router(svc.services.clone());
        let state = MockState::new(WalletData::default_mock());

        router.route(&InteractionEvent::new(EventKind::BalanceUpdateRequested), &state);

        assert!((state.get().balance - 1234.57).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_balance_payload() {
        let router = wallet_router(services().services);
        let state = MockState::new(WalletData::default_mock());

        let event = InteractionEvent::new(EventKind::BalanceUpdateRequested)
            .with_payload(Payload::Amount(-5.0));
        let outcome = router.route(&event, &state);

        assert!(matches!(outcome, RouteOutcome::Rejected(_)));
        assert!((state.get().balance - 2_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_withdraw_from_empty_wallet_warns() {
        let svc = services();
        let router = wallet_router(svc.services.clone());
        let state = MockState::new(WalletData::empty_mock());

        let event = InteractionEvent::new(EventKind::ActionRequested)
            .with_payload(Payload::Text("withdraw".to_string()));
        let outcome = router.route(&event, &state);

        assert_eq!(outcome, RouteOutcome::Unchanged);
        let presented = svc.modal.presented.lock().unwrap();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, NotificationLevel::Warn);
        assert_eq!(presented[0].2, "Nothing to withdraw");
    }

    #[test]
    fn test_tab_selection() {
        let router = tab_bar_router(services().services);
        let state = MockState::new(TabBarData::default_mock());

        assert_eq!(
            router.route(&InteractionEvent::selection(2), &state),
            RouteOutcome::Updated
        );
        assert_eq!(state.get().selected, 2);
        assert_eq!(
            router.route(&InteractionEvent::selection(2), &state),
            RouteOutcome::Unchanged
        );
        assert!(matches!(
            router.route(&InteractionEvent::selection(9), &state),
            RouteOutcome::Rejected(_)
        ));
        assert_eq!(state.get().selected, 2);
    }

    #[test]
    fn test_disabled_button_press_is_silent() {
        let svc = services();
        let router = button_router(svc.services.clone());

        let enabled = MockState::new(ButtonData::solid_mock());
        router.route(&InteractionEvent::new(EventKind::ActionRequested), &enabled);
        let disabled = MockState::new(ButtonData::disabled_mock());
        router.route(&InteractionEvent::new(EventKind::ActionRequested), &disabled);

        assert_eq!(svc.modal.titles(), vec!["Place Bet".to_string()]);
    }

    #[test]
    fn test_progress_advances_to_completion() {
        let router = progress_check_router(services().services);
        let state = MockState::new(ProgressCheckData::pending_mock());

        for _ in 0..DEFAULT_PROGRESS_SEGMENTS {
            router.route(&InteractionEvent::new(EventKind::Advance), &state);
        }
        assert_eq!(state.get().status, ProgressStatus::Completed);
        assert_eq!(
            router.route(&InteractionEvent::new(EventKind::Advance), &state),
            RouteOutcome::Unchanged
        );

        router.route(&InteractionEvent::new(EventKind::Reset), &state);
        assert_eq!(state.get().status, ProgressStatus::Pending);
    }

    #[test]
    fn test_capsule_toggle() {
        let router = capsule_router(services().services);
        let state = MockState::new(CapsuleData::outlined_mock());

        router.route(&InteractionEvent::selection(0), &state);
        assert!(state.get().is_selected);
        router.route(&InteractionEvent::new(EventKind::Reset), &state);
        assert!(!state.get().is_selected);
        assert_eq!(
            router.route(&InteractionEvent::new(EventKind::Reset), &state),
            RouteOutcome::Unchanged
        );
    }
}
