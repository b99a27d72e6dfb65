//! Cube face directions.

use std::fmt::{self, Display};

/// One of the six directions a sticker can face.
///
/// Variants are declared in alphabetical order of their letters
/// (`B`, `D`, `F`, `L`, `R`, `U`), which is also the canonical order used when
/// a [`Position`](crate::Position) is printed.
///
/// # Examples
///
/// ```
/// use rubik_core::Facing;
///
/// assert_eq!(Facing::Front.opposite(), Facing::Back);
/// assert_eq!(Facing::from_letter('u'), Some(Facing::Up));
/// assert_eq!(Facing::Right.to_string(), "R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Facing {
    /// The back face (`B`).
    Back = 0,
    /// The down face (`D`).
    Down = 1,
    /// The front face (`F`).
    Front = 2,
    /// The left face (`L`).
    Left = 3,
    /// The right face (`R`).
    Right = 4,
    /// The up face (`U`).
    Up = 5,
}

impl Facing {
    /// All facings in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Back,
        Self::Down,
        Self::Front,
        Self::Left,
        Self::Right,
        Self::Up,
    ];

    /// The four side faces adjacent to the up face, in the order the solver
    /// visits them.
    pub const SIDES: [Self; 4] = [Self::Front, Self::Left, Self::Back, Self::Right];

    /// Returns the index of this facing in [`Facing::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the letter used for this facing in move notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Back => 'B',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Up => 'U',
        }
    }

    /// Parses a facing letter, ignoring ASCII case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'B' => Some(Self::Back),
            'D' => Some(Self::Down),
            'F' => Some(Self::Front),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'U' => Some(Self::Up),
            _ => None,
        }
    }

    /// Returns the facing on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Front,
            Self::Down => Self::Up,
            Self::Front => Self::Back,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
        }
    }
}

impl Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, facing) in Facing::ALL.into_iter().enumerate() {
            assert_eq!(facing.index(), i);
        }
    }

    #[test]
    fn test_letter_roundtrip() {
        for facing in Facing::ALL {
            assert_eq!(Facing::from_letter(facing.letter()), Some(facing));
            assert_eq!(
                Facing::from_letter(facing.letter().to_ascii_lowercase()),
                Some(facing)
            );
        }
        assert_eq!(Facing::from_letter('X'), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for facing in Facing::ALL {
            assert_ne!(facing.opposite(), facing);
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }
}
