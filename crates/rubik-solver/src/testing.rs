//! Test utilities for phase implementations.
//!
//! [`PhaseTester`] runs a single phase on a prepared cube and checks what
//! came out of it.
//!
//! # Example
//!
//! ```ignore
//! PhaseTester::from_moves("X2 F")
//!     .run(&WhiteCross::new())
//!     .assert_complete(&WhiteCross::new())
//!     .assert_replays();
//! ```

use rubik_core::{Cube, Move, format_moves};

use crate::phase::{self, Phase, PhaseOutcome};

/// A test harness for verifying phase implementations.
///
/// All methods return `self`, enabling fluent method chaining. Assertion
/// methods panic with detailed messages on failure, using `#[track_caller]`
/// to report the correct source location.
#[derive(Debug)]
pub struct PhaseTester {
    initial: Cube,
    outcome: Option<PhaseOutcome>,
}

impl PhaseTester {
    /// Creates a new tester from an initial cube.
    pub fn new(initial: Cube) -> Self {
        Self {
            initial,
            outcome: None,
        }
    }

    /// Creates a new tester from a solved cube with `moves` applied.
    ///
    /// # Panics
    ///
    /// Panics if `moves` contains a malformed token.
    #[track_caller]
    pub fn from_moves(moves: &str) -> Self {
        let mut cube = Cube::new();
        cube.apply_all(Move::parse_sequence(moves).unwrap());
        Self::new(cube)
    }

    /// Creates a new tester from a scrambled cube on which the first `count`
    /// phases have already run.
    ///
    /// # Panics
    ///
    /// Panics if `scramble` is malformed or if one of the earlier phases
    /// fails.
    #[track_caller]
    pub fn after_phases(scramble: &str, count: usize) -> Self {
        let mut tester = Self::from_moves(scramble);
        for phase in phase::all_phases().iter().take(count) {
            let outcome = phase
                .solve(tester.initial)
                .unwrap_or_else(|e| panic!("phase {} failed: {e}", phase.name()));
            assert!(
                phase.is_complete(&outcome.cube),
                "phase {} did not complete",
                phase.name()
            );
            tester.initial = outcome.cube;
        }
        tester
    }

    /// Runs `phase` on the initial cube.
    ///
    /// # Panics
    ///
    /// Panics if the phase returns an error.
    #[track_caller]
    pub fn run(mut self, phase: &dyn Phase) -> Self {
        match phase.solve(self.initial.clone()) {
            Ok(outcome) => self.outcome = Some(outcome),
            Err(e) => panic!(
                "phase {} failed on\n{}\nerror: {e}",
                phase.name(),
                self.initial.to_net()
            ),
        }
        self
    }

    /// Returns the outcome of the last run.
    ///
    /// # Panics
    ///
    /// Panics if no phase has run yet.
    #[track_caller]
    pub fn into_outcome(self) -> PhaseOutcome {
        self.outcome.expect("no phase has run")
    }

    #[track_caller]
    fn outcome(&self) -> &PhaseOutcome {
        self.outcome.as_ref().expect("no phase has run")
    }

    /// Asserts that the goal of `phase` holds after the run.
    #[track_caller]
    pub fn assert_complete(self, phase: &dyn Phase) -> Self {
        let outcome = self.outcome();
        assert!(
            phase.is_complete(&outcome.cube),
            "phase {} not complete after {}\n{}",
            phase.name(),
            format_moves(&outcome.moves),
            outcome.cube.to_net()
        );
        self
    }

    /// Asserts that replaying the recorded moves on the initial cube gives
    /// the resulting cube, and that the explanation holds exactly those moves.
    #[track_caller]
    pub fn assert_replays(self) -> Self {
        let outcome = self.outcome();
        let mut replayed = self.initial.clone();
        replayed.apply_all(&outcome.moves);
        assert_eq!(replayed, outcome.cube, "moves do not reproduce the cube");
        assert_eq!(
            outcome.explanation.moves(),
            outcome.moves,
            "explanation disagrees with moves"
        );
        assert_eq!(outcome.cube.verify(), Ok(()));
        self
    }

    /// Asserts that the phase applied exactly `expected`.
    #[track_caller]
    pub fn assert_moves(self, expected: &str) -> Self {
        assert_eq!(format_moves(&self.outcome().moves), expected);
        self.assert_replays()
    }

    /// Asserts that the phase applied no moves.
    #[track_caller]
    pub fn assert_no_moves(self) -> Self {
        self.assert_moves("")
    }

    /// Asserts the descriptions of the top-level explanation entries.
    #[track_caller]
    pub fn assert_descriptions(self, expected: &[&str]) -> Self {
        let descriptions: Vec<_> = self
            .outcome()
            .explanation
            .entries()
            .iter()
            .map(|entry| entry.description())
            .collect();
        assert_eq!(descriptions, expected);
        self
    }
}
