use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::warn;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Dismiss the alert or overlay, or return to the catalog.
    Back,
    /// Show or hide the key reference.
    ToggleHelp,

    // Navigation / Focus
    /// Move selection or focus up.
    NavigateUp,
    /// Move selection or focus down.
    NavigateDown,
    /// Jump to the first entry.
    SelectFirst,
    /// Jump to the last entry.
    SelectLast,
    /// Open the selected screen or press the focused component.
    Select,
}

impl Action {
    /// Text shown in the footer and help.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Back => "Back",
            Self::ToggleHelp => "Help",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::SelectFirst => "First",
            Self::SelectLast => "Last",
            Self::Select => "Select",
        }
    }
}

/// A key bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key and modifiers, matched exactly.
    pub key: KeyEvent,
    /// Action triggered.
    pub action: Action,
    /// Footer and help text.
    pub label: Cow<'static, str>,
    /// Listed in the footer bar.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates the widget.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Keeps the binding out of the footer bar.
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Same code and exactly the same modifiers.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

/// Parses `"Ctrl+q"`, `"Alt+Enter"`, `"j"`, `"F1"` style key descriptions.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').collect();
    let key = parts.pop()?;

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "a" => modifiers |= KeyModifiers::ALT,
            "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" | "bksp" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower if lower.len() > 1 && lower.starts_with('f') => {
            KeyCode::F(lower[1..].parse().ok()?)
        }
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Global key map shared by every screen.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Keybind>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        Self {
            bindings: vec![
                Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit"),
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    Action::Quit,
                    "Quit",
                )
                .hidden(),
                Keybind::new(key(KeyCode::Esc), Action::Back, "Back"),
                Keybind::new(key(KeyCode::Backspace), Action::Back, "Back").hidden(),
                Keybind::new(key(KeyCode::Char('?')), Action::ToggleHelp, "Help"),
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
                    Action::ToggleHelp,
                    "Help",
                )
                .hidden(),
                Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
                Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
                Keybind::new(key(KeyCode::Char('g')), Action::SelectFirst, "First").hidden(),
                Keybind::new(
                    KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
                    Action::SelectLast,
                    "Last",
                )
                .hidden(),
                Keybind::new(key(KeyCode::Enter), Action::Select, "Select"),
            ],
        }
    }
}

impl KeyMap {
    /// Default bindings with user overrides placed first.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut map = Self::default();
        let mut custom: Vec<Keybind> = Vec::new();

        for (spec, action) in overrides {
            match parse_key(spec) {
                Some(key) => {
                    map.bindings.retain(|b| !b.matches(&key));
                    custom.push(Keybind::new(key, *action, action.label()).hidden());
                }
                None => warn!(key = %spec, "Ignoring unparsable keybinding"),
            }
        }

        custom.append(&mut map.bindings);
        map.bindings = custom;
        map
    }

    /// First binding matching `key` wins.
    #[must_use]
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }

    /// All bindings, overrides first.
    #[must_use]
    pub fn bindings(&self) -> &[Keybind] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("Alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_enter")]
    #[test_case("j", KeyCode::Char('j'), KeyModifiers::NONE ; "plain_char")]
    #[test_case("F2", KeyCode::F(2), KeyModifiers::NONE ; "function_key")]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    fn test_parse_key(spec: &str, code: KeyCode, modifiers: KeyModifiers) {
        let key = parse_key(spec).unwrap();
        assert_eq!(key.code, code);
        assert_eq!(key.modifiers, modifiers);
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        assert!(parse_key("Hyper+x").is_none());
        assert!(parse_key("xyz").is_none());
        assert!(parse_key("").is_none());
    }

    #[test]
    fn test_default_actions() {
        let map = KeyMap::default();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(map.action_for(&q), Some(Action::Quit));
        assert_eq!(map.action_for(&esc), Some(Action::Back));
        assert_eq!(map.action_for(&x), None);
    }

    #[test_case(KeyModifiers::NONE ; "bare")]
    #[test_case(KeyModifiers::SHIFT ; "shifted")]
    fn test_question_mark_toggles_help(modifiers: KeyModifiers) {
        let map = KeyMap::default();
        let key = KeyEvent::new(KeyCode::Char('?'), modifiers);
        assert_eq!(map.action_for(&key), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert("q".to_string(), Action::Back);
        overrides.insert("Ctrl+x".to_string(), Action::Quit);
        overrides.insert("Nope+x".to_string(), Action::Quit);

        let map = KeyMap::with_overrides(&overrides);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map.action_for(&q), Some(Action::Back));
        assert_eq!(map.action_for(&ctrl_x), Some(Action::Quit));
    }
}
