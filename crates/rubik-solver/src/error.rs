use rubik_core::{Color, Facing, InvalidCubeState, Position};

/// Errors that can occur while solving a cube.
///
/// [`SolverError::InvalidCube`] is the only error a caller can provoke with a
/// bad input. Every other variant means a solver phase met a state its
/// case tables do not cover, which cannot happen for a cube that passed
/// [`Cube::verify`](rubik_core::Cube::verify).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolverError {
    /// The cube cannot be reached from the solved state.
    #[display("invalid cube: {_0}")]
    #[from]
    InvalidCube(#[error(source)] InvalidCubeState),
    /// No cubie carries the requested colors.
    #[display("{phase}: no cubie with colors {}", format_colors(colors))]
    PieceNotFound {
        /// The phase that searched.
        phase: &'static str,
        /// The colors searched for.
        colors: Vec<Color>,
    },
    /// A sticker the phase relies on is absent.
    #[display("{phase}: cubie {position} has no {facing} sticker")]
    MissingSticker {
        /// The phase that looked up the sticker.
        phase: &'static str,
        /// The cubie position.
        position: Position,
        /// The facing looked up.
        facing: Facing,
    },
    /// A piece ended up in a configuration no case table handles.
    #[display("{phase}: unexpected case: {detail}")]
    UnexpectedCase {
        /// The phase that met the case.
        phase: &'static str,
        /// What was found.
        detail: String,
    },
    /// A phase loop exceeded its iteration cap.
    #[display("{phase}: no progress after {attempts} attempts")]
    Stuck {
        /// The phase that looped.
        phase: &'static str,
        /// The number of attempts made.
        attempts: usize,
    },
    /// A phase returned without reaching its goal.
    #[display("{phase}: finished without reaching its goal")]
    PhaseIncomplete {
        /// The phase that gave up.
        phase: &'static str,
    },
}

impl SolverError {
    /// Returns `true` for errors caused by a solver defect rather than by the
    /// input cube.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        !self.is_invalid_cube()
    }
}

fn format_colors(colors: &[Color]) -> String {
    colors.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
