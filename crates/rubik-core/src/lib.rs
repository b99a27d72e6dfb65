//! Core data structures for the Rubik's Cube.
//!
//! This crate models a 3x3x3 cube as 26 cubies and provides the move engine,
//! import/export of cube states and a reachability checker. It is shared by
//! the solver, the scrambler and the command-line front end.
//!
//! # Overview
//!
//! 1. **Vocabulary** - [`Facing`], [`Color`] and [`Position`] (a set of facings
//!    naming a cubie).
//! 2. **Pieces** - [`Cubie`], a fixed array of optional colors indexed by
//!    facing.
//! 3. **Moves** - [`Move`] tokens over face layers, slices and whole-cube
//!    rotations, applied through fixed sticker-transfer tables.
//! 4. **The cube** - [`Cube`] with move application, color queries, sticker
//!    import/export, 54-letter facelet strings and [`Cube::verify`].
//!
//! # Examples
//!
//! ```
//! use rubik_core::{Cube, Move};
//!
//! let mut cube = Cube::new();
//! let scramble = Move::parse_sequence("R U R' U' F2")?;
//! cube.apply_all(&scramble);
//! assert_eq!(cube.verify(), Ok(()));
//!
//! for mv in scramble.iter().rev() {
//!     cube.apply(mv.reverse());
//! }
//! assert!(cube.is_solved());
//! # Ok::<(), rubik_core::MoveParseError>(())
//! ```

pub use self::{
    color::Color,
    cube::{Cube, STICKER_COUNT, StateImportError, Sticker},
    cubie::Cubie,
    facelets::FaceletParseError,
    facing::Facing,
    moves::{Layer, Move, MoveParseError, Turn, format_moves},
    position::{CubieKind, Position, PositionParseError},
    verify::{InvalidCubeState, VALID_CUBE},
};

mod color;
mod cube;
mod cubie;
mod facelets;
mod facing;
mod moves;
mod position;
mod transform;
mod verify;

#[cfg(test)]
mod properties;
