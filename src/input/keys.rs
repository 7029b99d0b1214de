//! Keypad alphabet.

/// One key press from the 4x4 keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Decimal digit 0-9
    Digit(u8),
    /// `*`: submit the pending number
    Submit,
    /// `#`: discard input and return to the menu
    Cancel,
    /// `A`: save a sequence
    Save,
    /// `B`: use the current position while saving
    UseCurrent,
    /// `C`: load and replay a sequence
    Load,
    /// `D`: cycle between two positions
    Cycle,
}

/// Keypad layout as wired, row by row.
pub const KEYMAP: [[char; 4]; 4] = [
    ['1', '4', '7', '*'],
    ['2', '5', '8', '0'],
    ['3', '6', '9', '#'],
    ['A', 'B', 'C', 'D'],
];

impl Key {
    /// Decode a keypad character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '*' => Some(Key::Submit),
            '#' => Some(Key::Cancel),
            'A' => Some(Key::Save),
            'B' => Some(Key::UseCurrent),
            'C' => Some(Key::Load),
            'D' => Some(Key::Cycle),
            _ => None,
        }
    }

    /// Character printed on the key.
    pub fn as_char(self) -> char {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Key::Submit => '*',
            Key::Cancel => '#',
            Key::Save => 'A',
            Key::UseCurrent => 'B',
            Key::Load => 'C',
            Key::Cycle => 'D',
        }
    }

    /// Whether this is one of the lettered command keys.
    #[inline]
    pub fn is_command(self) -> bool {
        matches!(self, Key::Save | Key::UseCurrent | Key::Load | Key::Cycle)
    }
}

impl TryFrom<char> for Key {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Key::from_char(c).ok_or(c)
    }
}
