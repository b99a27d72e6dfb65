use rubik_core::{Color, Cube, Facing, Move, Position, format_moves};

use super::PhaseOutcome;
use crate::{Explanation, SolverError};

/// Working state of a single phase.
///
/// Every move goes through [`perform`](Self::perform), which keeps the cube,
/// the flat move list and the explanation in step with each other.
#[derive(Debug)]
pub(crate) struct PhaseRun {
    phase: &'static str,
    cube: Cube,
    moves: Vec<Move>,
    explanation: Explanation,
}

impl PhaseRun {
    pub(crate) fn new(phase: &'static str, cube: Cube) -> Self {
        Self {
            phase,
            cube,
            moves: Vec::new(),
            explanation: Explanation::new(),
        }
    }

    pub(crate) fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Applies `moves` and records them under `description`.
    pub(crate) fn perform(&mut self, description: impl Into<String>, moves: &[Move]) {
        let description = description.into();
        log::trace!("{}: {description}: {}", self.phase, format_moves(moves));
        self.cube.apply_all(moves);
        self.moves.extend_from_slice(moves);
        self.explanation.push_moves(description, moves.to_vec());
    }

    /// Records a step that needed no moves.
    pub(crate) fn note(&mut self, description: impl Into<String>) {
        self.perform(description, &[]);
    }

    /// Runs `f` with a fresh explanation level and attaches it under
    /// `description`, also when `f` fails.
    pub(crate) fn group<T>(
        &mut self,
        description: impl Into<String>,
        f: impl FnOnce(&mut Self) -> Result<T, SolverError>,
    ) -> Result<T, SolverError> {
        let outer = std::mem::take(&mut self.explanation);
        let result = f(self);
        let inner = std::mem::replace(&mut self.explanation, outer);
        self.explanation.push_steps(description, inner);
        result
    }

    pub(crate) fn locate(&self, colors: &[Color]) -> Result<Position, SolverError> {
        self.cube
            .search_by_colors(colors)
            .ok_or_else(|| SolverError::PieceNotFound {
                phase: self.phase,
                colors: colors.to_vec(),
            })
    }

    pub(crate) fn sticker(&self, position: Position, facing: Facing) -> Result<Color, SolverError> {
        self.cube
            .sticker(position, facing)
            .ok_or(SolverError::MissingSticker {
                phase: self.phase,
                position,
                facing,
            })
    }

    pub(crate) fn center(&self, facing: Facing) -> Result<Color, SolverError> {
        self.sticker(Position::from_facing(facing), facing)
    }

    /// Returns the facing of `color` on the cubie at `position`.
    pub(crate) fn color_facing(
        &self,
        position: Position,
        color: Color,
    ) -> Result<Facing, SolverError> {
        self.cube
            .cubie(position)
            .color_facing(color)
            .ok_or_else(|| self.unexpected(format!("cubie {position} has no {color} sticker")))
    }

    pub(crate) fn unexpected(&self, detail: impl Into<String>) -> SolverError {
        SolverError::UnexpectedCase {
            phase: self.phase,
            detail: detail.into(),
        }
    }

    pub(crate) fn stuck(&self, attempts: usize) -> SolverError {
        SolverError::Stuck {
            phase: self.phase,
            attempts,
        }
    }

    pub(crate) fn finish(self) -> PhaseOutcome {
        PhaseOutcome {
            cube: self.cube,
            moves: self.moves,
            explanation: self.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExplanationNode;

    #[test]
    fn test_perform_keeps_moves_and_explanation_in_step() {
        let mut run = PhaseRun::new("test", Cube::new());
        run.perform("turn", &Move::sequence(["R", "U"]));
        run.group("inner", |run| {
            run.note("nothing to do");
            run.perform("undo", &Move::sequence(["U'", "R'"]));
            Ok(())
        })
        .unwrap();

        let outcome = run.finish();
        assert_eq!(outcome.cube, Cube::new());
        assert_eq!(outcome.moves, outcome.explanation.moves());
        assert_eq!(format_moves(&outcome.moves), "R U U' R'");
        let entries = outcome.explanation.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].description(), "inner");
        assert!(matches!(entries[1].node(), ExplanationNode::Steps(steps) if steps.entries().len() == 2));
    }

    #[test]
    fn test_group_attaches_on_error() {
        let mut run = PhaseRun::new("test", Cube::new());
        let result: Result<(), _> = run.group("failing", |run| {
            run.perform("turn", &[Move::from_token("F")]);
            Err(run.unexpected("boom"))
        });
        assert_eq!(
            result,
            Err(SolverError::UnexpectedCase {
                phase: "test",
                detail: "boom".to_owned(),
            })
        );
        let outcome = run.finish();
        assert_eq!(outcome.explanation.move_count(), 1);
        assert_eq!(outcome.explanation.entries()[0].description(), "failing");
    }

    #[test]
    fn test_lookups() {
        let run = PhaseRun::new("test", Cube::new());
        assert_eq!(run.center(Facing::Up), Ok(Color::Yellow));
        assert_eq!(
            run.locate(&[Color::White, Color::Red]),
            Ok(Position::DF)
        );
        assert_eq!(
            run.color_facing(Position::DF, Color::Red),
            Ok(Facing::Front)
        );
        assert!(run.locate(&[Color::White, Color::Yellow]).unwrap_err().is_piece_not_found());
        assert!(run.sticker(Position::DF, Facing::Up).unwrap_err().is_missing_sticker());
        assert!(run.color_facing(Position::DF, Color::Blue).unwrap_err().is_unexpected_case());
    }
}
