//! Generic demo screen: a gallery, its state controls and the observation panel.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tracing::{debug, error};

use super::catalog_screen::ScreenKind;
use crate::application::gallery::{EntryId, GalleryHarness, GalleryRegistry, Slot};
use crate::application::router::{InteractionRouter, RouteOutcome};
use crate::application::services::ObservationLog;
use crate::domain::keybinding::Action;
use crate::domain::{InteractionEvent, MockState, ModalPort, NotificationLevel};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{EventResult, control_index, control_key, is_component_key};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ComponentUnit, ComponentView, GalleryView, ObservationPanel, TerminalHarness, reveal_focus,
};

const SIDE_PANEL_WIDTH: u16 = 48;

/// A screen the app can show next to the catalog.
pub trait GalleryScreen {
    /// Which catalog entry this screen is.
    fn kind(&self) -> ScreenKind;

    /// Handles a key-mapped action. Returns `Continue` when unhandled.
    fn handle_action(&mut self, action: Action) -> EventResult;

    /// Handles a key with no mapped action.
    fn handle_key(&mut self, key: KeyEvent) -> EventResult;

    /// Draws the screen body between the header and footer.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);
}

/// What a state control does.
pub enum ControlAction<C> {
    /// Emits `event` through the slot's unit.
    Dispatch {
        entry: EntryId,
        event: InteractionEvent,
    },
    /// Remounts the slot with a fresh state built by `config`.
    Replace {
        entry: EntryId,
        config: Rc<dyn Fn() -> C>,
    },
    /// Focuses and scrolls to the slot.
    Reveal(EntryId),
}

/// A numbered entry in the "State Controls" list.
pub struct Control<C> {
    label: String,
    action: ControlAction<C>,
}

impl<C> Control<C> {
    /// Emits `event` through the unit in `entry`.
    #[must_use]
    pub fn dispatch(label: impl Into<String>, entry: EntryId, event: InteractionEvent) -> Self {
        Self {
            label: label.into(),
            action: ControlAction::Dispatch { entry, event },
        }
    }

    /// Remounts `entry` with a fresh state built from `config`.
    #[must_use]
    pub fn replace(label: impl Into<String>, entry: EntryId, config: impl Fn() -> C + 'static) -> Self {
        Self {
            label: label.into(),
            action: ControlAction::Replace {
                entry,
                config: Rc::new(config),
            },
        }
    }

    /// Focuses `entry` and scrolls it into view.
    #[must_use]
    pub fn reveal(label: impl Into<String>, entry: EntryId) -> Self {
        Self {
            label: label.into(),
            action: ControlAction::Reveal(entry),
        }
    }

    /// Text shown in the control list.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<C> fmt::Debug for Control<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One component kind showcased through a harness.
///
/// Everything here is owned by the screen: dropping it unmounts the gallery
/// and releases every mock state.
pub struct DemoScreen<C: ComponentView> {
    kind: ScreenKind,
    harness: TerminalHarness<C>,
    controls: Vec<Control<C>>,
    log: Rc<RefCell<ObservationLog>>,
    modal: Arc<dyn ModalPort>,
    show_description: bool,
    timestamp_format: String,
}

impl<C: ComponentView> DemoScreen<C> {
    /// Mounts `registry` and wires its events into `router`.
    #[must_use]
    pub fn new(
        kind: ScreenKind,
        registry: GalleryRegistry<C, ComponentUnit<C>>,
        router: InteractionRouter<C>,
        controls: Vec<Control<C>>,
        ui: &UiConfig,
    ) -> Self {
        let log = Rc::new(RefCell::new(ObservationLog::new(ui.observation_log_size)));
        let modal = Arc::clone(&router.services().modal);
        let labels: Vec<String> = registry.iter().map(|e| e.label().to_string()).collect();

        let mut harness = GalleryHarness::new(registry);
        let sink_log = Rc::clone(&log);
        let alerts = Arc::clone(&modal);
        harness.on_interaction(move |entry: EntryId, event: &InteractionEvent, state: &MockState<C>| {
            let label = labels.get(entry.index()).map_or("?", String::as_str);
            let outcome = router.route(event, state);
            if let RouteOutcome::Rejected(e) = &outcome {
                alerts.present(NotificationLevel::Error, label, &e.to_string());
            }
            sink_log.borrow_mut().record(entry, label, event, outcome);
        });
        harness.mount();

        debug!(screen = kind.name(), controls = controls.len(), "Demo screen opened");
        Self {
            kind,
            harness,
            controls,
            log,
            modal,
            show_description: ui.show_descriptions,
            timestamp_format: ui.timestamp_format.clone(),
        }
    }

    /// Gallery owned by this screen.
    #[must_use]
    pub fn harness(&self) -> &TerminalHarness<C> {
        &self.harness
    }

    /// State controls, in digit-key order.
    #[must_use]
    pub fn controls(&self) -> &[Control<C>] {
        &self.controls
    }

    /// Observation log shared with the interaction callback.
    #[must_use]
    pub fn log(&self) -> std::cell::Ref<'_, ObservationLog> {
        self.log.borrow()
    }

    /// Runs the control at `index`. Returns `Continue` when there is none.
    pub fn run_control(&mut self, index: usize) -> EventResult {
        let Some(control) = self.controls.get(index) else {
            return EventResult::Continue;
        };
        debug!(screen = self.kind.name(), control = %control.label, "Running control");

        let result = match &control.action {
            ControlAction::Dispatch { entry, event } => self.harness.dispatch(*entry, event).map(|_| ()),
            ControlAction::Replace { entry, config } => {
                let config = Rc::clone(config);
                self.harness
                    .replace(*entry, move || MockState::new(config()), ComponentUnit::new)
            }
            ControlAction::Reveal(entry) => self.harness.scroll_to_entry(*entry),
        };

        if let Err(e) = result {
            error!(screen = self.kind.name(), error = %e, "Control failed");
            self.modal
                .present(NotificationLevel::Error, self.kind.title(), &e.to_string());
        }
        EventResult::Consumed
    }

    /// Sends `code` to the focused component.
    pub fn press_focused(&mut self, code: KeyCode) -> EventResult {
        let Some(unit) = self.harness.focused().and_then(Slot::unit) else {
            return EventResult::Continue;
        };
        match unit.press(code) {
            Some(event) => {
                debug!(event = %event, "Focused component emitted");
                EventResult::Consumed
            }
            None => EventResult::Continue,
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let lines: Vec<Line> = self
            .controls
            .iter()
            .enumerate()
            .map(|(index, control)| {
                let key = control_key(index).map_or_else(|| " ".to_string(), |c| c.to_string());
                Line::from(vec![
                    Span::styled(format!(" {key} "), theme.selection_style),
                    Span::raw(" "),
                    Span::raw(control.label.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.dimmed_style)
                    .title(" State Controls "),
            )
            .render(area, buf);
    }
}

impl<C: ComponentView> GalleryScreen for DemoScreen<C> {
    fn kind(&self) -> ScreenKind {
        self.kind
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::NavigateUp => self.harness.focus_previous(),
            Action::NavigateDown => self.harness.focus_next(),
            Action::SelectFirst => self.harness.focus_first(),
            Action::SelectLast => self.harness.focus_last(),
            Action::Select => return self.press_focused(KeyCode::Enter),
            Action::Quit | Action::Back | Action::ToggleHelp => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if let Some(index) = control_index(&key) {
            return self.run_control(index);
        }
        if is_component_key(&key) {
            return self.press_focused(key.code);
        }
        EventResult::Continue
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let description_height = if self.show_description { 2 } else { 0 };
        let [description_area, body] =
            Layout::vertical([Constraint::Length(description_height), Constraint::Fill(1)]).areas(area);
        let [gallery_area, side_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDE_PANEL_WIDTH)]).areas(body);
        let controls_height = u16::try_from(self.controls.len()).unwrap_or(u16::MAX).saturating_add(2);
        let [controls_area, observation_area] =
            Layout::vertical([Constraint::Length(controls_height), Constraint::Fill(1)]).areas(side_area);

        if self.show_description {
            Paragraph::new(Span::styled(self.kind.description(), theme.dimmed_style))
                .wrap(Wrap { trim: true })
                .render(description_area, buf);
        }

        reveal_focus(&mut self.harness, gallery_area.height);
        GalleryView::new(&self.harness, theme).render(gallery_area, buf);

        self.render_controls(controls_area, buf, theme);

        let focused = self.harness.focused();
        let label = focused.map_or("", Slot::label);
        let summary = focused
            .and_then(Slot::unit)
            .map(ComponentUnit::summary)
            .unwrap_or_default();
        let log = self.log.borrow();
        ObservationPanel::new(label, &summary, &log, &self.timestamp_format, theme)
            .render(observation_area, buf);
    }
}

impl<C: ComponentView> fmt::Debug for DemoScreen<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoScreen")
            .field("kind", &self.kind)
            .field("slots", &self.harness.len())
            .field("controls", &self.controls)
            .finish_non_exhaustive()
    }
}
