use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

/// Terminal-independent key, so tests can drive the dashboard without crossterm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => return None,
        };
        Some(key)
    }
}

/// A key press plus whether Ctrl was held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    /// Translate a crossterm event. Keys the dashboard never binds yield `None`.
    pub fn from_crossterm(event: CrosstermKeyEvent) -> Option<Self> {
        Some(Self {
            key: Key::from_code(event.code)?,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        })
    }
}
