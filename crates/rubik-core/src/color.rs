//! Sticker colors and the solved-cube color scheme.

use std::fmt::{self, Display};

use crate::Facing;

/// A sticker color.
///
/// The solved cube uses a fixed scheme: red front, orange back, green right,
/// blue left, yellow up and white down. Validity checking and the solver both
/// rely on this scheme through [`Color::home_facing`] and
/// [`Color::on_solved`].
///
/// # Examples
///
/// ```
/// use rubik_core::{Color, Facing};
///
/// assert_eq!(Color::on_solved(Facing::Up), Color::Yellow);
/// assert_eq!(Color::White.opposite(), Color::Yellow);
/// assert_eq!(Color::from_letter('g'), Some(Color::Green));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    /// Red (`R`).
    Red = 0,
    /// Orange (`O`).
    Orange = 1,
    /// Green (`G`).
    Green = 2,
    /// Blue (`B`).
    Blue = 3,
    /// Yellow (`Y`).
    Yellow = 4,
    /// White (`W`).
    White = 5,
}

impl Color {
    /// All colors, in index order.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
    ];

    /// The three pairs of colors that sit on opposite faces of a standard cube.
    pub const OPPOSITE_PAIRS: [(Self, Self); 3] = [
        (Self::White, Self::Yellow),
        (Self::Blue, Self::Green),
        (Self::Red, Self::Orange),
    ];

    /// Returns the index of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-letter abbreviation of this color.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
        }
    }

    /// Parses a color letter, ignoring ASCII case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'O' => Some(Self::Orange),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'W' => Some(Self::White),
            _ => None,
        }
    }

    /// Returns the color on the opposite face of a solved cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Red => Self::Orange,
            Self::Orange => Self::Red,
            Self::Green => Self::Blue,
            Self::Blue => Self::Green,
            Self::Yellow => Self::White,
            Self::White => Self::Yellow,
        }
    }

    /// Returns the face this color occupies on a solved cube.
    #[must_use]
    pub const fn home_facing(self) -> Facing {
        match self {
            Self::Red => Facing::Front,
            Self::Orange => Facing::Back,
            Self::Green => Facing::Right,
            Self::Blue => Facing::Left,
            Self::Yellow => Facing::Up,
            Self::White => Facing::Down,
        }
    }

    /// Returns the color shown on `facing` of a solved cube.
    #[must_use]
    pub const fn on_solved(facing: Facing) -> Self {
        match facing {
            Facing::Front => Self::Red,
            Facing::Back => Self::Orange,
            Facing::Right => Self::Green,
            Facing::Left => Self::Blue,
            Facing::Up => Self::Yellow,
            Facing::Down => Self::White,
        }
    }

    /// Returns `true` for the two colors of the up/down axis (white and yellow).
    #[must_use]
    pub const fn is_white_or_yellow(self) -> bool {
        matches!(self, Self::White | Self::Yellow)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
