//! Move notation: face turns, slice turns and whole-cube rotations.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The layer (or whole cube) a [`Move`] turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Front face.
    F,
    /// Back face.
    B,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Up face.
    U,
    /// Down face.
    D,
    /// Whole-cube rotation following `R`.
    X,
    /// Whole-cube rotation following `U`.
    Y,
    /// Whole-cube rotation following `F`.
    Z,
    /// Middle slice between `L` and `R`, turning like `L`.
    M,
    /// Equatorial slice between `U` and `D`, turning like `D`.
    E,
    /// Standing slice between `F` and `B`, turning like `F`.
    S,
}

impl Layer {
    /// All layers.
    pub const ALL: [Self; 12] = [
        Self::F,
        Self::B,
        Self::L,
        Self::R,
        Self::U,
        Self::D,
        Self::X,
        Self::Y,
        Self::Z,
        Self::M,
        Self::E,
        Self::S,
    ];

    /// The six outer face layers.
    pub const FACES: [Self; 6] = [Self::F, Self::B, Self::L, Self::R, Self::U, Self::D];

    /// Returns the notation letter of this layer.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::F => 'F',
            Self::B => 'B',
            Self::L => 'L',
            Self::R => 'R',
            Self::U => 'U',
            Self::D => 'D',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
            Self::M => 'M',
            Self::E => 'E',
            Self::S => 'S',
        }
    }

    /// Parses a layer letter, ignoring ASCII case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'F' => Some(Self::F),
            'B' => Some(Self::B),
            'L' => Some(Self::L),
            'R' => Some(Self::R),
            'U' => Some(Self::U),
            'D' => Some(Self::D),
            'X' => Some(Self::X),
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            'M' => Some(Self::M),
            'E' => Some(Self::E),
            'S' => Some(Self::S),
            _ => None,
        }
    }

    /// Returns `true` for the whole-cube rotations `X`, `Y` and `Z`.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Z)
    }

    /// Returns `true` for the slice moves `M`, `E` and `S`.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Self::M | Self::E | Self::S)
    }

    /// Returns the face layer on the other side of the cube, or `None` for
    /// slices and rotations.
    #[must_use]
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Self::F => Some(Self::B),
            Self::B => Some(Self::F),
            Self::L => Some(Self::R),
            Self::R => Some(Self::L),
            Self::U => Some(Self::D),
            Self::D => Some(Self::U),
            Self::X | Self::Y | Self::Z | Self::M | Self::E | Self::S => None,
        }
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How far a layer is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    /// A clockwise quarter turn (no suffix).
    Clockwise,
    /// A counterclockwise quarter turn (`'`).
    CounterClockwise,
    /// A half turn (`2`).
    Double,
}

impl Turn {
    /// All turn amounts.
    pub const ALL: [Self; 3] = [Self::Clockwise, Self::CounterClockwise, Self::Double];

    /// Returns the notation suffix of this turn.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
            Self::Double => "2",
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Double => Self::Double,
        }
    }
}

/// A single move token such as `R`, `U'` or `F2`.
///
/// Moves are immutable values; every property is derived from the layer and
/// the turn amount.
///
/// # Examples
///
/// ```
/// use rubik_core::{Layer, Move};
///
/// let mv: Move = "u'".parse()?;
/// assert_eq!(mv.face(), Layer::U);
/// assert!(mv.counterclockwise());
/// assert_eq!(mv.to_string(), "U'");
/// assert_eq!(mv.reverse().to_string(), "U");
///
/// let sequence = Move::parse_sequence("R U R' U'")?;
/// assert_eq!(sequence.len(), 4);
/// # Ok::<(), rubik_core::MoveParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    layer: Layer,
    turn: Turn,
}

impl Move {
    /// Creates a move from its layer and turn amount.
    #[must_use]
    pub const fn new(layer: Layer, turn: Turn) -> Self {
        Self { layer, turn }
    }

    /// Returns the layer this move turns.
    #[must_use]
    pub const fn face(self) -> Layer {
        self.layer
    }

    /// Returns the turn amount.
    #[must_use]
    pub const fn turn(self) -> Turn {
        self.turn
    }

    /// Returns `true` for a clockwise quarter turn.
    #[must_use]
    pub const fn clockwise(self) -> bool {
        matches!(self.turn, Turn::Clockwise)
    }

    /// Returns `true` for a counterclockwise quarter turn.
    #[must_use]
    pub const fn counterclockwise(self) -> bool {
        matches!(self.turn, Turn::CounterClockwise)
    }

    /// Returns `true` for a half turn.
    #[must_use]
    pub const fn double(self) -> bool {
        matches!(self.turn, Turn::Double)
    }

    /// Returns `true` if this move rotates the whole cube.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        self.layer.is_rotation()
    }

    /// Returns `true` if this move turns a middle slice.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        self.layer.is_slice()
    }

    /// Returns the move that undoes this one.
    ///
    /// Quarter turns swap direction; half turns are their own inverse.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(self.layer, self.turn.reverse())
    }

    /// Parses a token at compile time.
    ///
    /// Used to write canned algorithms as constants; an invalid token is a
    /// compile error when evaluated in a `const` context.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not a valid move token.
    #[must_use]
    pub const fn from_token(token: &str) -> Self {
        match parse_token(token.as_bytes()) {
            Some(mv) => mv,
            None => panic!("invalid move token"),
        }
    }

    /// Builds an array of moves from tokens at compile time.
    ///
    /// # Panics
    ///
    /// Panics if any token is not a valid move token.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::Move;
    ///
    /// const SEXY: [Move; 4] = Move::sequence(["R", "U", "R'", "U'"]);
    /// assert_eq!(rubik_core::format_moves(&SEXY), "R U R' U'");
    /// ```
    #[must_use]
    pub const fn sequence<const N: usize>(tokens: [&str; N]) -> [Self; N] {
        let mut moves = [Self::new(Layer::U, Turn::Clockwise); N];
        let mut i = 0;
        while i < N {
            moves[i] = Self::from_token(tokens[i]);
            i += 1;
        }
        moves
    }

    /// Parses a whitespace-separated move sequence.
    ///
    /// # Errors
    ///
    /// Returns the error of the first malformed token.
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>, MoveParseError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

const fn parse_token(bytes: &[u8]) -> Option<Move> {
    let (first, turn) = match bytes {
        [first] => (*first, Turn::Clockwise),
        [first, b'\''] => (*first, Turn::CounterClockwise),
        [first, b'2'] => (*first, Turn::Double),
        _ => return None,
    };
    match Layer::from_letter(first as char) {
        Some(layer) => Some(Move::new(layer, turn)),
        None => None,
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer, self.turn.suffix())
    }
}

/// Error returned for a malformed move token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("malformed move token {token:?}")]
pub struct MoveParseError {
    token: String,
}

impl MoveParseError {
    /// Returns the token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s.as_bytes()).ok_or_else(|| MoveParseError {
            token: s.to_owned(),
        })
    }
}

/// Formats a move list as space-separated tokens.
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tokens() {
        for layer in Layer::ALL {
            for turn in Turn::ALL {
                let token = format!("{}{}", layer.letter(), turn.suffix());
                let mv: Move = token.parse().unwrap();
                assert_eq!(mv, Move::new(layer, turn));
                assert_eq!(mv.to_string(), token);
            }
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("r'".parse::<Move>().unwrap(), Move::from_token("R'"));
        assert_eq!("x2".parse::<Move>().unwrap(), Move::from_token("X2"));
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["", "Q", "R3", "R''", "RU", "2", "'", " R"] {
            let err = token.parse::<Move>().unwrap_err();
            assert_eq!(err.token(), token);
        }
    }

    #[test]
    fn test_direction_flags() {
        let cw = Move::from_token("F");
        let ccw = Move::from_token("F'");
        let double = Move::from_token("F2");
        assert!(cw.clockwise() && !cw.counterclockwise() && !cw.double());
        assert!(!ccw.clockwise() && ccw.counterclockwise() && !ccw.double());
        assert!(!double.clockwise() && !double.counterclockwise() && double.double());
        assert_eq!(cw.face(), Layer::F);
        assert_eq!(cw.turn(), Turn::Clockwise);
        assert_eq!(ccw.turn(), Turn::CounterClockwise);
        assert_eq!(double.turn(), Turn::Double);
    }

    #[test]
    fn test_opposite_faces() {
        for layer in Layer::FACES {
            let opposite = layer.opposite().unwrap();
            assert_ne!(opposite, layer);
            assert_eq!(opposite.opposite(), Some(layer));
        }
        assert_eq!(Layer::M.opposite(), None);
        assert_eq!(Layer::X.opposite(), None);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Move::from_token("R").reverse(), Move::from_token("R'"));
        assert_eq!(Move::from_token("R'").reverse(), Move::from_token("R"));
        assert_eq!(Move::from_token("R2").reverse(), Move::from_token("R2"));
        for layer in Layer::ALL {
            for turn in Turn::ALL {
                let mv = Move::new(layer, turn);
                assert_eq!(mv.reverse().reverse(), mv);
                assert_eq!(mv.reverse().turn(), turn.reverse());
            }
        }
    }

    #[test]
    fn test_parse_sequence() {
        let moves = Move::parse_sequence("  R U2\tF' ").unwrap();
        assert_eq!(format_moves(&moves), "R U2 F'");
        assert!(Move::parse_sequence("").unwrap().is_empty());
        let err = Move::parse_sequence("R U Q").unwrap_err();
        assert_eq!(err.token(), "Q");
    }

    #[test]
    fn test_const_sequence() {
        const ALGORITHM: [Move; 3] = Move::sequence(["R", "U'", "F2"]);
        assert_eq!(format_moves(&ALGORITHM), "R U' F2");
        assert!(Move::from_token("Y").is_rotation());
        assert!(Move::from_token("M'").is_slice());
        assert!(!Move::from_token("D").is_rotation());
    }
}
