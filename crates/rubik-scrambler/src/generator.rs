use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use rubik_core::{Cube, Layer, Move, Turn};

use crate::ScrambleSeed;

/// A generated scramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// The seed the scramble was generated from.
    pub seed: ScrambleSeed,
    /// The scramble moves.
    pub moves: Vec<Move>,
    /// A solved cube with `moves` applied.
    pub cube: Cube,
}

/// Generates random sequences of outer-face turns.
///
/// A face is never turned twice in a row, and after two turns of opposite
/// faces neither of them is turned again right away, since such moves would
/// merge with or commute into the previous ones.
///
/// # Examples
///
/// ```
/// use rubik_scrambler::ScrambleGenerator;
///
/// let scramble = ScrambleGenerator::new(25).generate();
/// assert_eq!(scramble.moves.len(), 25);
/// println!("{}: {}", scramble.seed, rubik_core::format_moves(&scramble.moves));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleGenerator {
    length: usize,
}

impl Default for ScrambleGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl ScrambleGenerator {
    /// Number of moves of a default scramble.
    pub const DEFAULT_LENGTH: usize = 20;

    /// Creates a generator of scrambles with `length` moves.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    /// Returns the number of moves per scramble.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Generates a scramble from a random seed.
    #[must_use]
    pub fn generate(&self) -> Scramble {
        self.generate_with_seed(ScrambleSeed::random())
    }

    /// Generates the scramble determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ScrambleSeed) -> Scramble {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut moves: Vec<Move> = Vec::with_capacity(self.length);

        while moves.len() < self.length {
            let allowed: Vec<Layer> = Layer::FACES
                .into_iter()
                .filter(|&layer| is_allowed_after(&moves, layer))
                .collect();
            let layer = allowed[rng.random_range(0..allowed.len())];
            let turn = Turn::ALL[rng.random_range(0..Turn::ALL.len())];
            moves.push(Move::new(layer, turn));
        }

        let mut cube = Cube::new();
        cube.apply_all(&moves);
        Scramble { seed, moves, cube }
    }
}

fn is_allowed_after(moves: &[Move], layer: Layer) -> bool {
    match moves {
        [] => true,
        [.., last] if last.face() == layer => false,
        [.., second_to_last, last] => {
            !(last.face().opposite() == Some(second_to_last.face())
                && second_to_last.face() == layer)
        }
        [_] => true,
    }
}
