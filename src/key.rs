#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical keys understood by the vim engine.
///
/// This enum is independent of how the host encodes keystrokes.
/// Hosts translate their native commands into these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyCode {
    /// A printable character key carrying its literal value.
    Char(char),
    /// The Enter/Return key.
    Enter,
    /// The Escape key.
    Esc,
    /// The Tab key. Shift+Tab is Tab with [`Modifiers::SHIFT`].
    Tab,
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// The Up arrow key.
    Up,
    /// The Down arrow key.
    Down,
    /// The Left arrow key.
    Left,
    /// The Right arrow key.
    Right,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// The Home key. The host sends it as `BOL`.
    Home,
    /// The End key. The host sends it as `EOL`.
    End,
    /// The Insert key, which toggles overtype in the host.
    Insert,
    /// Function key `F1`..=`F12`.
    F(u8),
    /// No keystroke at all. Used by commands raised from the UI (undo/redo buttons).
    Nop,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

/// A key together with the modifiers held while it was pressed.
///
/// Two values are equal when both the key and the modifiers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyInput {
    /// The logical key.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl Default for KeyInput {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl KeyInput {
    /// The input attached to commands that have no keystroke behind them.
    pub const DEFAULT: KeyInput = KeyInput {
        code: KeyCode::Nop,
        mods: Modifiers::empty(),
    };

    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }

    pub const fn from_char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Returns a copy of this input with `mods` added to the ones already held.
    ///
    /// Application is a set union, so it is associative and idempotent.
    #[must_use]
    pub fn with_mods(self, mods: Modifiers) -> Self {
        Self {
            code: self.code,
            mods: self.mods | mods,
        }
    }

    /// The literal character this key produces, if any.
    pub fn raw_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) => Some(c),
            KeyCode::Enter => Some('\r'),
            KeyCode::Tab => Some('\t'),
            KeyCode::Esc => Some('\u{1b}'),
            KeyCode::Backspace => Some('\u{8}'),
            _ => None,
        }
    }

    pub fn has_shift(&self) -> bool {
        self.mods.contains(Modifiers::SHIFT)
    }
}

impl From<KeyCode> for KeyInput {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}
