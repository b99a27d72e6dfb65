//! Beginner-method (layer-by-layer) solver for the Rubik's Cube.
//!
//! The solver runs five [`phase`]s in order: white cross, white face, second
//! layer, yellow cross and yellow face. Each phase looks at the cube, applies
//! canned algorithms until its goal holds and records what it did in an
//! [`Explanation`].
//!
//! # Examples
//!
//! ```
//! use rubik_core::{Cube, Move};
//! use rubik_solver::BeginnerSolver;
//!
//! let mut cube = Cube::new();
//! cube.apply_all(Move::parse_sequence("D2 B' L U2 F R' D L2 B U'")?);
//!
//! let solution = BeginnerSolver::with_all_phases().solve(&cube)?;
//! cube.apply_all(solution.moves());
//! assert!(cube.is_solved());
//! println!("{}", solution.explanation());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{beginner_solver::*, error::*, explanation::*, phase::PhaseOutcome};

mod beginner_solver;
mod error;
mod explanation;
pub mod phase;

#[cfg(test)]
mod testing;
