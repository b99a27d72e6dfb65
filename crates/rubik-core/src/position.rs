//! Cubie positions as sets of facings.
//!
//! A cubie is identified by the faces it touches: a center touches one face,
//! an edge two and a corner three. [`Position`] stores that set as a bitmask
//! over the six [`Facing`]s, so the key is independent of letter order.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use crate::Facing;

bitflags::bitflags! {
    /// The set of facings a cubie touches.
    ///
    /// The 26 valid cubie positions are available as associated constants
    /// named by their letters in canonical (alphabetical) order, e.g.
    /// [`Position::FRU`] or [`Position::DF`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::{Facing, Position};
    ///
    /// let pos: Position = "urf".parse()?;
    /// assert_eq!(pos, Position::FRU);
    /// assert_eq!(pos.to_string(), "FRU");
    /// assert!(pos.contains_facing(Facing::Up));
    /// assert!(pos.kind().is_some_and(|kind| kind.is_corner()));
    /// # Ok::<(), rubik_core::PositionParseError>(())
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Position: u8 {
        /// Touches the back face.
        const BACK = 1 << 0;
        /// Touches the down face.
        const DOWN = 1 << 1;
        /// Touches the front face.
        const FRONT = 1 << 2;
        /// Touches the left face.
        const LEFT = 1 << 3;
        /// Touches the right face.
        const RIGHT = 1 << 4;
        /// Touches the up face.
        const UP = 1 << 5;
    }
}

/// Classification of a cubie by the number of faces it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CubieKind {
    /// A center piece with one sticker.
    Center,
    /// An edge piece with two stickers.
    Edge,
    /// A corner piece with three stickers.
    Corner,
}

#[expect(missing_docs)]
impl Position {
    pub const F: Self = Self::FRONT;
    pub const B: Self = Self::BACK;
    pub const L: Self = Self::LEFT;
    pub const R: Self = Self::RIGHT;
    pub const U: Self = Self::UP;
    pub const D: Self = Self::DOWN;

    pub const FU: Self = Self::FRONT.union(Self::UP);
    pub const FR: Self = Self::FRONT.union(Self::RIGHT);
    pub const DF: Self = Self::DOWN.union(Self::FRONT);
    pub const FL: Self = Self::FRONT.union(Self::LEFT);
    pub const BU: Self = Self::BACK.union(Self::UP);
    pub const BR: Self = Self::BACK.union(Self::RIGHT);
    pub const BD: Self = Self::BACK.union(Self::DOWN);
    pub const BL: Self = Self::BACK.union(Self::LEFT);
    pub const LU: Self = Self::LEFT.union(Self::UP);
    pub const RU: Self = Self::RIGHT.union(Self::UP);
    pub const DL: Self = Self::DOWN.union(Self::LEFT);
    pub const DR: Self = Self::DOWN.union(Self::RIGHT);

    pub const FLU: Self = Self::FRONT.union(Self::LEFT).union(Self::UP);
    pub const FRU: Self = Self::FRONT.union(Self::RIGHT).union(Self::UP);
    pub const DFL: Self = Self::DOWN.union(Self::FRONT).union(Self::LEFT);
    pub const DFR: Self = Self::DOWN.union(Self::FRONT).union(Self::RIGHT);
    pub const BLU: Self = Self::BACK.union(Self::LEFT).union(Self::UP);
    pub const BRU: Self = Self::BACK.union(Self::RIGHT).union(Self::UP);
    pub const BDL: Self = Self::BACK.union(Self::DOWN).union(Self::LEFT);
    pub const BDR: Self = Self::BACK.union(Self::DOWN).union(Self::RIGHT);
}

impl Position {
    /// The six center positions.
    pub const CENTERS: [Self; 6] = [Self::F, Self::B, Self::L, Self::R, Self::U, Self::D];

    /// The twelve edge positions.
    pub const EDGES: [Self; 12] = [
        Self::FU,
        Self::FR,
        Self::DF,
        Self::FL,
        Self::BU,
        Self::BR,
        Self::BD,
        Self::BL,
        Self::LU,
        Self::RU,
        Self::DL,
        Self::DR,
    ];

    /// The eight corner positions.
    pub const CORNERS: [Self; 8] = [
        Self::FLU,
        Self::FRU,
        Self::DFL,
        Self::DFR,
        Self::BLU,
        Self::BRU,
        Self::BDL,
        Self::BDR,
    ];

    /// All 26 cubie positions in slot order: centers, then edges, then corners.
    ///
    /// The index of a position in this array is its [`slot`](Self::slot).
    pub const ALL: [Self; 26] = [
        Self::F,
        Self::B,
        Self::L,
        Self::R,
        Self::U,
        Self::D,
        Self::FU,
        Self::FR,
        Self::DF,
        Self::FL,
        Self::BU,
        Self::BR,
        Self::BD,
        Self::BL,
        Self::LU,
        Self::RU,
        Self::DL,
        Self::DR,
        Self::FLU,
        Self::FRU,
        Self::DFL,
        Self::DFR,
        Self::BLU,
        Self::BRU,
        Self::BDL,
        Self::BDR,
    ];

    /// Returns the single-facing position of a center.
    #[must_use]
    pub const fn from_facing(facing: Facing) -> Self {
        Self::from_bits_retain(1 << facing as u8)
    }

    /// Returns `true` if this position touches `facing`.
    #[must_use]
    pub const fn contains_facing(self, facing: Facing) -> bool {
        self.contains(Self::from_facing(facing))
    }

    /// Returns the number of facings in this position.
    #[must_use]
    pub const fn facing_count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Iterates over the facings of this position in canonical order.
    pub fn facings(self) -> impl Iterator<Item = Facing> {
        Facing::ALL
            .into_iter()
            .filter(move |&facing| self.contains_facing(facing))
    }

    /// Returns the index of this position in [`Position::ALL`], or `None` if it
    /// is not a cubie position (empty, containing opposite facings, or more
    /// than three facings).
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        let bits = self.bits() as usize;
        if bits >= SLOT_INDEX.len() {
            return None;
        }
        match SLOT_INDEX[bits] {
            NO_SLOT => None,
            slot => Some(slot as usize),
        }
    }

    /// Returns `true` if a cubie lives at this position.
    #[must_use]
    pub const fn is_cubie(self) -> bool {
        self.slot().is_some()
    }

    /// Returns what kind of cubie lives at this position.
    #[must_use]
    pub const fn kind(self) -> Option<CubieKind> {
        if !self.is_cubie() {
            return None;
        }
        match self.facing_count() {
            1 => Some(CubieKind::Center),
            2 => Some(CubieKind::Edge),
            _ => Some(CubieKind::Corner),
        }
    }
}

const NO_SLOT: u8 = u8::MAX;

#[expect(clippy::cast_possible_truncation)]
const SLOT_INDEX: [u8; 64] = {
    let mut table = [NO_SLOT; 64];
    let mut i = 0;
    while i < Position::ALL.len() {
        table[Position::ALL[i].bits() as usize] = i as u8;
        i += 1;
    }
    table
};

impl From<Facing> for Position {
    fn from(facing: Facing) -> Self {
        Self::from_facing(facing)
    }
}

impl FromIterator<Facing> for Position {
    fn from_iter<T: IntoIterator<Item = Facing>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, facing| acc | Self::from_facing(facing))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for facing in self.facings() {
            write!(f, "{facing}")?;
        }
        Ok(())
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}

/// Errors returned when parsing a [`Position`] from its letters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionParseError {
    /// A character is not a facing letter.
    #[display("invalid facing letter {found:?} in position")]
    InvalidFacing {
        /// The offending character.
        found: char,
    },
    /// A facing letter appears twice.
    #[display("duplicate facing {facing} in position")]
    DuplicateFacing {
        /// The repeated facing.
        facing: Facing,
    },
    /// The facings do not name a cubie.
    #[display("{text:?} is not a cubie position")]
    NotACubie {
        /// The parsed input.
        text: String,
    },
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut position = Self::empty();
        for ch in s.chars() {
            let facing =
                Facing::from_letter(ch).ok_or(PositionParseError::InvalidFacing { found: ch })?;
            if position.contains_facing(facing) {
                return Err(PositionParseError::DuplicateFacing { facing });
            }
            position |= Self::from_facing(facing);
        }
        if !position.is_cubie() {
            return Err(PositionParseError::NotACubie { text: s.to_owned() });
        }
        Ok(position)
    }
}
