use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the wizard and its steps understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Tab,
    BackTab,
    Enter,
    Esc,
    Backspace,
    Char(char),
    /// Ctrl+C. Handled by the host, never forwarded to a step.
    Interrupt,
}

impl Key {
    /// Map a terminal key event to the wizard vocabulary.
    ///
    /// Releases and repeats are dropped so a key press is seen once.
    pub fn from_event(event: &KeyEvent) -> Option<Key> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Interrupt),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Some(Key::BackTab),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::BackTab => Some(Key::BackTab),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Esc),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Char(c) => Some(Key::Char(c)),
            _ => None,
        }
    }

    /// True for `c` in either case.
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }

    pub fn is_next_field(&self) -> bool {
        matches!(self, Key::Tab | Key::Down)
    }

    pub fn is_prev_field(&self) -> bool {
        matches!(self, Key::BackTab | Key::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        let event = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Key::from_event(&event), Some(Key::Interrupt));
    }

    #[test]
    fn shift_tab_maps_to_back_tab() {
        let event = press(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(Key::from_event(&event), Some(Key::BackTab));
        let event = press(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(Key::from_event(&event), Some(Key::BackTab));
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(Key::from_event(&event), None);
    }

    #[test]
    fn char_match_ignores_case() {
        assert!(Key::Char('C').is_char('c'));
        assert!(Key::Char('c').is_char('c'));
        assert!(!Key::Char('d').is_char('c'));
        assert!(!Key::Enter.is_char('c'));
    }
}
