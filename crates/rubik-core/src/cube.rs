//! The cube: 26 cubies, move application and queries.

use crate::{
    Color, Cubie, Facing, Move, Position,
    transform::{self, Transfer},
};

/// A single sticker of an external cube state: the cubie position, the
/// direction the sticker faces and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    /// The cubie the sticker belongs to.
    pub position: Position,
    /// The direction the sticker faces.
    pub facing: Facing,
    /// The sticker color.
    pub color: Color,
}

impl Sticker {
    /// Creates a sticker triple.
    #[must_use]
    pub const fn new(position: Position, facing: Facing, color: Color) -> Self {
        Self {
            position,
            facing,
            color,
        }
    }
}

/// Errors returned when importing an external cube state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateImportError {
    /// The position does not name one of the 26 cubies.
    #[display("{position} is not a cubie position")]
    NotACubie {
        /// The rejected position.
        position: Position,
    },
    /// The facing is not one of the cubie's sides.
    #[display("cubie {position} has no {facing} sticker")]
    FacingNotOnPosition {
        /// The cubie position.
        position: Position,
        /// The rejected facing.
        facing: Facing,
    },
    /// The same sticker was supplied twice.
    #[display("sticker {facing} of cubie {position} supplied twice")]
    DuplicateSticker {
        /// The cubie position.
        position: Position,
        /// The repeated facing.
        facing: Facing,
    },
    /// Not every sticker was supplied.
    #[display("{missing} stickers missing from cube state")]
    MissingStickers {
        /// How many of the 54 stickers were not supplied.
        missing: usize,
    },
}

/// The number of stickers on a cube.
pub const STICKER_COUNT: usize = 54;

/// A 3x3x3 cube made of 26 cubies.
///
/// A new cube is solved in the standard color scheme (see
/// [`Color::on_solved`]). Moves permute stickers between cubies according to
/// fixed transfer tables; every move conserves the multiset of sticker colors.
///
/// # Examples
///
/// ```
/// use rubik_core::{Color, Cube, Facing, Move, Position};
///
/// let mut cube = Cube::new();
/// cube.apply(Move::from_token("R"));
/// assert_eq!(cube.sticker(Position::FRU, Facing::Up), Some(Color::Red));
/// assert!(!cube.is_solved());
///
/// cube.apply(Move::from_token("R'"));
/// assert!(cube.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    cubies: [Cubie; 26],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Creates a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cubies: Position::ALL.map(Cubie::solved),
        }
    }

    /// Returns the cubie at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not one of the 26 cubie positions.
    #[must_use]
    #[track_caller]
    pub fn cubie(&self, position: Position) -> &Cubie {
        let Some(slot) = position.slot() else {
            panic!("{position} is not a cubie position");
        };
        &self.cubies[slot]
    }

    /// Iterates over every cubie together with its position.
    pub fn cubies(&self) -> impl Iterator<Item = (Position, &Cubie)> {
        Position::ALL.into_iter().zip(&self.cubies)
    }

    /// Returns the color of the sticker facing `facing` on the cubie at
    /// `position`, or `None` if there is no such sticker.
    #[must_use]
    pub fn sticker(&self, position: Position, facing: Facing) -> Option<Color> {
        position
            .slot()
            .and_then(|slot| self.cubies[slot].color(facing))
    }

    /// Iterates over all 54 stickers, cubie by cubie.
    pub fn stickers(&self) -> impl Iterator<Item = Sticker> + '_ {
        self.cubies().flat_map(|(position, cubie)| {
            cubie
                .stickers()
                .map(move |(facing, color)| Sticker::new(position, facing, color))
        })
    }

    /// Overwrites one sticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is not a cubie or the facing is not one
    /// of its sides.
    pub fn set_sticker(&mut self, sticker: Sticker) -> Result<(), StateImportError> {
        let Sticker {
            position,
            facing,
            color,
        } = sticker;
        let slot = position
            .slot()
            .ok_or(StateImportError::NotACubie { position })?;
        if !position.contains_facing(facing) {
            return Err(StateImportError::FacingNotOnPosition { position, facing });
        }
        self.cubies[slot].set_color(facing, Some(color));
        Ok(())
    }

    /// Builds a cube from external sticker triples.
    ///
    /// Every one of the 54 stickers must be supplied exactly once. The
    /// resulting cube is not checked for solvability; use
    /// [`verify`](Self::verify) for that.
    ///
    /// # Errors
    ///
    /// Returns an error if a triple names an invalid sticker, a sticker is
    /// supplied twice, or stickers are missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::{Cube, Move};
    ///
    /// let mut scrambled = Cube::new();
    /// scrambled.apply_all(Move::parse_sequence("R U F'")?);
    ///
    /// let imported = Cube::from_external_state(scrambled.stickers())?;
    /// assert_eq!(imported, scrambled);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_external_state<I>(stickers: I) -> Result<Self, StateImportError>
    where
        I: IntoIterator<Item = Sticker>,
    {
        let mut cube = Self::new();
        let mut seen = [Position::empty(); 26];
        let mut count = 0;
        for sticker in stickers {
            cube.set_sticker(sticker)?;
            let Some(slot) = sticker.position.slot() else {
                return Err(StateImportError::NotACubie {
                    position: sticker.position,
                });
            };
            let facing = Position::from_facing(sticker.facing);
            if seen[slot].contains(facing) {
                return Err(StateImportError::DuplicateSticker {
                    position: sticker.position,
                    facing: sticker.facing,
                });
            }
            seen[slot] |= facing;
            count += 1;
        }
        if count != STICKER_COUNT {
            return Err(StateImportError::MissingStickers {
                missing: STICKER_COUNT - count,
            });
        }
        Ok(cube)
    }

    /// Returns the 54 sticker triples describing this cube.
    #[must_use]
    pub fn external_state(&self) -> Vec<Sticker> {
        self.stickers().collect()
    }

    /// Applies a single move.
    ///
    /// All cubies are snapshotted before the transfers run, so every transfer
    /// reads the pre-move state.
    pub fn apply(&mut self, mv: Move) {
        let quarter_turns = if mv.double() { 2 } else { 1 };
        for _ in 0..quarter_turns {
            self.apply_quarter_turn(transform::transfers(mv.face()), mv.counterclockwise());
        }
    }

    /// Applies moves in order.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<Move>,
    {
        use std::borrow::Borrow as _;
        for mv in moves {
            self.apply(*mv.borrow());
        }
    }

    fn apply_quarter_turn(&mut self, table: &[Transfer], inverse: bool) {
        let before = self.cubies;
        for &transfer in table {
            let transfer = if inverse {
                transfer.reversed()
            } else {
                transfer
            };
            let source = &before[transfer.source.slot()];
            let target = &mut self.cubies[transfer.target.slot()];
            for (&from, &to) in transfer
                .source
                .facings()
                .iter()
                .zip(transfer.target.facings())
            {
                target.set_color(to, source.color(from));
            }
        }
    }

    /// Finds the cubie whose colors are exactly `colors`, in any order.
    ///
    /// Returns the first match in [`Position::ALL`] order, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::{Color, Cube, Position};
    ///
    /// let cube = Cube::new();
    /// let found = cube.search_by_colors(&[Color::Yellow, Color::Green, Color::Red]);
    /// assert_eq!(found, Some(Position::FRU));
    /// assert_eq!(cube.search_by_colors(&[Color::White, Color::Yellow]), None);
    /// ```
    #[must_use]
    pub fn search_by_colors(&self, colors: &[Color]) -> Option<Position> {
        self.cubies()
            .find_map(|(position, cubie)| cubie.has_colors(colors).then_some(position))
    }

    /// Returns the color of the center on `facing`.
    #[must_use]
    pub fn center_color(&self, facing: Facing) -> Option<Color> {
        self.sticker(Position::from_facing(facing), facing)
    }

    /// Returns the facing whose center shows `color`.
    #[must_use]
    pub fn center_facing(&self, color: Color) -> Option<Facing> {
        Facing::ALL
            .into_iter()
            .find(|&facing| self.center_color(facing) == Some(color))
    }

    /// Returns `true` if every sticker of the cubie at `position` matches the
    /// center of the face it is on.
    #[must_use]
    pub fn is_placed(&self, position: Position) -> bool {
        position.facings().all(|facing| {
            let sticker = self.sticker(position, facing);
            sticker.is_some() && sticker == self.center_color(facing)
        })
    }

    /// Returns `true` if every face shows a single color.
    ///
    /// Whole-cube rotations do not affect this: a rotated solved cube is still
    /// solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL.into_iter().all(|position| self.is_placed(position))
    }

    /// Counts the stickers of each color, indexed by [`Color::index`].
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for sticker in self.stickers() {
            counts[sticker.color.index()] += 1;
        }
        counts
    }
}
