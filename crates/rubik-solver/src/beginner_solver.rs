use rubik_core::{Cube, Move};

use crate::{
    Explanation, SolverError,
    phase::{self, BoxedPhase},
};

/// The result of a successful solve.
///
/// # Examples
///
/// ```
/// use rubik_core::{Cube, Move};
/// use rubik_solver::BeginnerSolver;
///
/// let mut cube = Cube::new();
/// cube.apply_all(Move::parse_sequence("R U R' U' F2 D")?);
///
/// let solution = BeginnerSolver::with_all_phases().solve(&cube)?;
/// assert!(solution.cube().is_solved());
/// assert_eq!(solution.explanation().move_count(), solution.moves().len());
///
/// cube.apply_all(solution.moves());
/// assert!(cube.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
    explanation: Explanation,
    phase_moves: Vec<usize>,
    cube: Cube,
}

impl Solution {
    /// Returns the moves to apply to the input cube, in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the explanation, one group per phase.
    #[must_use]
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    /// Returns the number of moves each phase contributed, in solver order.
    #[must_use]
    pub fn phase_moves(&self) -> &[usize] {
        &self.phase_moves
    }

    /// Returns the cube after all moves.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Returns the total number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the input cube needed no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// A layer-by-layer solver built from a list of phases.
///
/// The input cube is verified first, so that an unreachable cube is reported
/// as [`SolverError::InvalidCube`] instead of tripping up a phase. It is then
/// cloned once and handed from phase to phase, and every phase has to leave
/// its goal satisfied.
///
/// # Examples
///
/// ```
/// use rubik_core::{Cube, Move};
/// use rubik_solver::{
///     BeginnerSolver,
///     phase::{BoxedPhase, WhiteCross},
/// };
///
/// let phases: Vec<BoxedPhase> = vec![Box::new(WhiteCross::new())];
/// let solver = BeginnerSolver::new(phases);
///
/// let mut cube = Cube::new();
/// cube.apply_all(Move::parse_sequence("F2 R D'")?);
/// let solution = solver.solve(&cube)?;
/// assert_eq!(solution.phase_moves().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BeginnerSolver {
    phases: Vec<BoxedPhase>,
}

impl Default for BeginnerSolver {
    fn default() -> Self {
        Self::with_all_phases()
    }
}

impl BeginnerSolver {
    /// Creates a new solver running `phases` in order.
    #[must_use]
    pub fn new(phases: Vec<BoxedPhase>) -> Self {
        Self { phases }
    }

    /// Creates a new solver with the five phases of the beginner method, as
    /// returned by [`phase::all_phases`].
    #[must_use]
    pub fn with_all_phases() -> Self {
        Self {
            phases: phase::all_phases(),
        }
    }

    /// Returns the configured phases in order.
    #[must_use]
    pub fn phases(&self) -> &[BoxedPhase] {
        &self.phases
    }

    /// Solves `cube` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCube`] if `cube` cannot be reached from
    /// the solved state. Any other error means a phase failed on a valid
    /// cube (see [`SolverError::is_internal`]).
    pub fn solve(&self, cube: &Cube) -> Result<Solution, SolverError> {
        cube.verify()
            .inspect_err(|e| log::warn!("refusing to solve: {e}"))?;

        let mut cube = cube.clone();
        let mut moves = Vec::new();
        let mut explanation = Explanation::new();
        let mut phase_moves = Vec::with_capacity(self.phases.len());

        for phase in &self.phases {
            log::debug!("starting phase {}", phase.name());
            let outcome = phase.solve(cube)?;
            if !phase.is_complete(&outcome.cube) {
                return Err(SolverError::PhaseIncomplete {
                    phase: phase.name(),
                });
            }
            log::debug!(
                "finished phase {} with {} moves",
                phase.name(),
                outcome.moves.len()
            );

            cube = outcome.cube;
            phase_moves.push(outcome.moves.len());
            moves.extend(outcome.moves);
            explanation.push_steps(format!("Solve {}", phase.name()), outcome.explanation);
        }

        Ok(Solution {
            moves,
            explanation,
            phase_moves,
            cube,
        })
    }
}
