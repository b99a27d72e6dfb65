//! Seeded random scrambles for the Rubik's Cube.
//!
//! A [`ScrambleGenerator`] draws a sequence of outer-face turns from a PCG
//! generator seeded by a 256-bit [`ScrambleSeed`]. The same seed and length
//! always give the same scramble, so a seed is enough to reproduce a cube.
//!
//! # Examples
//!
//! ```
//! use rubik_scrambler::{ScrambleGenerator, ScrambleSeed};
//!
//! let generator = ScrambleGenerator::new(20);
//! let seed = ScrambleSeed::from_phrase("hello");
//!
//! let scramble = generator.generate_with_seed(seed);
//! assert_eq!(scramble.moves.len(), 20);
//! assert_eq!(scramble, generator.generate_with_seed(seed));
//! assert_eq!(scramble.cube.verify(), Ok(()));
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
