//! Flat 54-character facelet strings.
//!
//! Faces are listed in the order up, left, front, right, back, down. Each face
//! is read row by row as seen when looking at it with the up face (or, for the
//! up and down faces, the back and front faces) at the top, giving nine color
//! letters per face. Whitespace between letters is ignored on input.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Color, Cube, Facing, Position, StateImportError, Sticker, cube::STICKER_COUNT};

/// Where each character of a facelet string lives on the cube.
const FACELET_MAP: [(Position, Facing); STICKER_COUNT] = {
    use Facing::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        // up
        (Position::BLU, U),
        (Position::BU, U),
        (Position::BRU, U),
        (Position::LU, U),
        (Position::U, U),
        (Position::RU, U),
        (Position::FLU, U),
        (Position::FU, U),
        (Position::FRU, U),
        // left
        (Position::BLU, L),
        (Position::LU, L),
        (Position::FLU, L),
        (Position::BL, L),
        (Position::L, L),
        (Position::FL, L),
        (Position::BDL, L),
        (Position::DL, L),
        (Position::DFL, L),
        // front
        (Position::FLU, F),
        (Position::FU, F),
        (Position::FRU, F),
        (Position::FL, F),
        (Position::F, F),
        (Position::FR, F),
        (Position::DFL, F),
        (Position::DF, F),
        (Position::DFR, F),
        // right
        (Position::FRU, R),
        (Position::RU, R),
        (Position::BRU, R),
        (Position::FR, R),
        (Position::R, R),
        (Position::BR, R),
        (Position::DFR, R),
        (Position::DR, R),
        (Position::BDR, R),
        // back
        (Position::BRU, B),
        (Position::BU, B),
        (Position::BLU, B),
        (Position::BR, B),
        (Position::B, B),
        (Position::BL, B),
        (Position::BDR, B),
        (Position::BD, B),
        (Position::BDL, B),
        // down
        (Position::DFL, D),
        (Position::DF, D),
        (Position::DFR, D),
        (Position::DL, D),
        (Position::D, D),
        (Position::DR, D),
        (Position::BDL, D),
        (Position::BD, D),
        (Position::BDR, D),
    ]
};

/// Errors returned when parsing a facelet string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FaceletParseError {
    /// The string does not hold exactly 54 color letters.
    #[display("expected 54 facelets, found {len}")]
    InvalidLength {
        /// Number of non-whitespace characters found.
        len: usize,
    },
    /// A character is not a color letter.
    #[display("invalid color {found:?} at facelet {index}")]
    InvalidColor {
        /// Facelet index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// The decoded stickers could not be imported.
    #[display("{_0}")]
    InvalidState(#[error(source)] StateImportError),
}

impl Cube {
    /// Parses a cube from a 54-letter facelet string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly 54 color
    /// letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::Cube;
    ///
    /// let solved = "YYYYYYYYY BBBBBBBBB RRRRRRRRR GGGGGGGGG OOOOOOOOO WWWWWWWWW";
    /// let cube = Cube::from_facelets(solved)?;
    /// assert!(cube.is_solved());
    /// assert_eq!(cube.to_facelets(), solved.replace(' ', ""));
    /// # Ok::<(), rubik_core::FaceletParseError>(())
    /// ```
    pub fn from_facelets(s: &str) -> Result<Self, FaceletParseError> {
        let letters: Vec<char> = s.chars().filter(|ch| !ch.is_whitespace()).collect();
        if letters.len() != STICKER_COUNT {
            return Err(FaceletParseError::InvalidLength { len: letters.len() });
        }
        let mut stickers = Vec::with_capacity(STICKER_COUNT);
        for (index, (&letter, &(position, facing))) in
            letters.iter().zip(&FACELET_MAP).enumerate()
        {
            let color = Color::from_letter(letter).ok_or(FaceletParseError::InvalidColor {
                index,
                found: letter,
            })?;
            stickers.push(Sticker::new(position, facing, color));
        }
        Self::from_external_state(stickers).map_err(FaceletParseError::InvalidState)
    }

    /// Returns the 54-letter facelet string of this cube.
    #[must_use]
    pub fn to_facelets(&self) -> String {
        FACELET_MAP
            .iter()
            .map(|&(position, facing)| self.sticker(position, facing).map_or('?', Color::letter))
            .collect()
    }

    /// Renders the cube as an unfolded net: up on top, then left, front, right
    /// and back side by side, then down.
    #[must_use]
    pub fn to_net(&self) -> String {
        let facelets: Vec<char> = self.to_facelets().chars().collect();
        let row = |face: usize, r: usize| -> String {
            let start = face * 9 + r * 3;
            facelets[start..start + 3].iter().collect()
        };

        let mut lines = Vec::with_capacity(9);
        for r in 0..3 {
            lines.push(format!("    {}", row(0, r)));
        }
        for r in 0..3 {
            let sides: Vec<String> = (1..=4).map(|face| row(face, r)).collect();
            lines.push(sides.join(" "));
        }
        for r in 0..3 {
            lines.push(format!("    {}", row(5, r)));
        }
        lines.join("\n")
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_facelets())
    }
}

impl FromStr for Cube {
    type Err = FaceletParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_facelets(s)
    }
}
