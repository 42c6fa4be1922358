//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing handled the event.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Key presses worth handling. Releases and repeats are dropped.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Zero-based control index for digit keys: `1` is 0, `9` is 8, `0` is 9.
#[must_use]
pub fn control_index(key: &KeyEvent) -> Option<usize> {
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let digit = usize::try_from(c.to_digit(10)?).ok()?;
    Some(if digit == 0 { 9 } else { digit - 1 })
}

/// Display key for the control at `index`.
#[must_use]
pub fn control_key(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(u32::try_from(index + 1).ok()?, 10),
        9 => Some('0'),
        _ => None,
    }
}

/// Keys forwarded to the focused component.
#[must_use]
pub fn is_component_key(key: &KeyEvent) -> bool {
    key.modifiers.is_empty()
        && matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test_case('1', Some(0) ; "one")]
    #[test_case('9', Some(8) ; "nine")]
    #[test_case('0', Some(9) ; "zero")]
    #[test_case('a', None ; "letter")]
    fn test_control_index(c: char, expected: Option<usize>) {
        assert_eq!(
            control_index(&make_key_event(KeyCode::Char(c), KeyModifiers::NONE)),
            expected
        );
    }

    #[test]
    fn test_control_index_ignores_ctrl() {
        assert_eq!(
            control_index(&make_key_event(KeyCode::Char('1'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_control_key_inverts_index() {
        for index in 0..10 {
            let c = control_key(index).unwrap();
            let key = make_key_event(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(control_index(&key), Some(index));
        }
        assert_eq!(control_key(10), None);
    }

    #[test]
    fn test_releases_are_dropped() {
        let press = Event::Key(make_key_event(KeyCode::Enter, KeyModifiers::NONE));
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        assert!(key_press(&press).is_some());
        assert!(key_press(&release).is_none());
    }

    #[test]
    fn test_component_keys() {
        assert!(is_component_key(&make_key_event(KeyCode::Left, KeyModifiers::NONE)));
        assert!(is_component_key(&make_key_event(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!is_component_key(&make_key_event(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(!is_component_key(&make_key_event(KeyCode::Enter, KeyModifiers::CONTROL)));
    }
}
