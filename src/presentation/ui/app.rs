//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use tokio::time::interval;
use tracing::{debug, info};

use super::catalog_screen::{CatalogScreen, ScreenKind};
use super::demo_screen::GalleryScreen;
use super::demos::build_screen;
use super::help_popup::HelpPopup;
use super::notification_popup::NotificationPopup;
use crate::application::router::PlatformServices;
use crate::application::services::{AlertQueue, NotificationManager};
use crate::domain::keybinding::{Action, KeyMap};
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::events::{EventResult, key_press};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle,
};

const ALERT_TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

enum CurrentScreen {
    Catalog,
    Demo(Box<dyn GalleryScreen>),
}

/// Top-level state: the catalog, at most one demo screen, alerts and help.
pub struct App {
    state: AppState,
    screen: CurrentScreen,
    catalog: CatalogScreen,
    keymap: KeyMap,
    theme: Theme,
    ui: UiConfig,
    services: PlatformServices,
    alerts: AlertQueue,
    show_help: bool,
}

impl App {
    /// Starts on the catalog. `alerts` must be the modal port inside `services`.
    #[must_use]
    pub fn new(config: &AppConfig, services: PlatformServices, alerts: AlertQueue) -> Self {
        Self {
            state: AppState::Running,
            screen: CurrentScreen::Catalog,
            catalog: CatalogScreen::new(),
            keymap: KeyMap::with_overrides(&config.keybindings),
            theme: Theme::new(
                &config.theme.accent_color,
                config.theme.success_color.as_deref(),
            ),
            ui: config.ui.clone(),
            services,
            alerts,
            show_help: false,
        }
    }

    /// Builds a fresh demo screen for `kind`, dropping the current one.
    pub fn open(&mut self, kind: ScreenKind) {
        self.close_screen();
        info!(screen = kind.name(), "Opening screen");
        self.catalog.select(kind);
        self.screen = CurrentScreen::Demo(build_screen(kind, self.services.clone(), &self.ui));
    }

    /// Returns to the catalog. Dropping the screen unmounts its gallery.
    pub fn close_screen(&mut self) {
        if let CurrentScreen::Demo(screen) = &self.screen {
            debug!(screen = screen.kind().name(), "Closing screen");
        }
        self.screen = CurrentScreen::Catalog;
    }

    /// `None` while the catalog is shown.
    #[must_use]
    pub fn current_screen(&self) -> Option<ScreenKind> {
        match &self.screen {
            CurrentScreen::Catalog => None,
            CurrentScreen::Demo(screen) => Some(screen.kind()),
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut alert_interval = interval(ALERT_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                _ = alert_interval.tick() => {
                    self.alerts.with(NotificationManager::tick);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.close_screen();
        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        key_press(event).map_or(EventResult::Continue, |key| self.handle_key(key))
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let Some(action) = self.keymap.action_for(&key) else {
            if self.show_help {
                return EventResult::Consumed;
            }
            return match &mut self.screen {
                CurrentScreen::Demo(screen) => screen.handle_key(key),
                CurrentScreen::Catalog => EventResult::Continue,
            };
        };

        match action {
            Action::Quit => return EventResult::Exit,
            Action::Back => return self.back(),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                return EventResult::Consumed;
            }
            _ if self.show_help => return EventResult::Consumed,
            _ => {}
        }

        if let CurrentScreen::Demo(screen) = &mut self.screen {
            match screen.handle_action(action) {
                EventResult::Continue => screen.handle_key(key),
                result => result,
            }
        } else {
            self.handle_catalog_action(action)
        }
    }

    /// Dismisses the alert, then the help overlay, then the demo screen.
    fn back(&mut self) -> EventResult {
        if self.alerts.with(NotificationManager::dismiss) {
            return EventResult::Consumed;
        }
        if self.show_help {
            self.show_help = false;
            return EventResult::Consumed;
        }
        match self.screen {
            CurrentScreen::Demo(_) => {
                self.close_screen();
                EventResult::Consumed
            }
            CurrentScreen::Catalog => EventResult::Continue,
        }
    }

    fn handle_catalog_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::NavigateUp => self.catalog.select_previous(),
            Action::NavigateDown => self.catalog.select_next(),
            Action::SelectFirst => self.catalog.select_first(),
            Action::SelectLast => self.catalog.select_last(),
            Action::Select => self.open(self.catalog.selected()),
            Action::Quit | Action::Back | Action::ToggleHelp => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn focus_context(&self) -> FocusContext {
        if self.show_help {
            return FocusContext::Help;
        }
        match self.screen {
            CurrentScreen::Catalog => FocusContext::Catalog,
            CurrentScreen::Demo(_) => FocusContext::Gallery,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.draw(area, frame.buffer_mut());
    }

    fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = self.current_screen().map_or("Catalog", ScreenKind::title);
        HeaderBar::new(crate::NAME, crate::VERSION)
            .screen(title)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        match &mut self.screen {
            CurrentScreen::Catalog => self.catalog.render(body_area, buf, &self.theme),
            CurrentScreen::Demo(screen) => screen.render(body_area, buf, &self.theme),
        }

        let info = match self.screen {
            CurrentScreen::Catalog => None,
            CurrentScreen::Demo(_) => Some("1-0 controls  ←/→ Space interact"),
        };
        FooterBar::new(self.keymap.bindings())
            .focus_context(self.focus_context())
            .right_info(info)
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer_area, buf);

        if self.show_help {
            HelpPopup::new(self.keymap.bindings(), &self.theme).render(body_area, buf);
        }

        let alert = self.alerts.with(|m| m.current_notification().cloned());
        if let Some(alert) = alert {
            NotificationPopup::new(&alert, &self.theme).render(body_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::ports::mocks::{MockClipboard, MockRandom};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn app() -> (App, AlertQueue) {
        let alerts = AlertQueue::new(Duration::from_secs(5));
        let services = PlatformServices::new(
            Arc::new(MockClipboard::new()),
            Arc::new(alerts.clone()),
            Arc::new(MockRandom::default()),
        );
        (App::new(&AppConfig::default(), services, alerts.clone()), alerts)
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_catalog_navigation_opens_selected_screen() {
        let (mut app, _) = app();
        assert_eq!(app.current_screen(), None);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen(), Some(ScreenKind::Wallet));
    }

    #[test]
    fn test_control_alert_then_back_to_catalog() {
        let (mut app, alerts) = app();
        app.open(ScreenKind::Buttons);

        assert_eq!(press(&mut app, KeyCode::Char('1')), EventResult::Consumed);
        let level = alerts.with(|m| m.current_notification().map(|n| n.level));
        assert_eq!(level, Some(NotificationLevel::Success));

        press(&mut app, KeyCode::Esc);
        assert!(!alerts.with(|m| m.has_notifications()));
        assert_eq!(app.current_screen(), Some(ScreenKind::Buttons));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen(), None);
        assert_eq!(app.catalog.selected(), ScreenKind::Buttons);
    }

    #[test]
    fn test_help_overlay_swallows_navigation() {
        let (mut app, _) = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.focus_context(), FocusContext::Help);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), None);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_key_exits() {
        let (mut app, _) = app();
        app.open(ScreenKind::Capsules);
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
    }

    #[test]
    fn test_render_demo_screen() {
        let (mut app, _) = app();
        app.open(ScreenKind::ProgressCheck);

        let text = screen_text(&mut app);

        assert!(text.contains("Progress Check"));
        assert!(text.contains("State Controls"));
        assert!(text.contains("GALLERY"));
    }
}
