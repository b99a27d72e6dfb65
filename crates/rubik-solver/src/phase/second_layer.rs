use rubik_core::{Color, Cube, Facing, Move, Position};

use super::{
    BoxedPhase, MAX_ATTEMPTS, Phase, PhaseOutcome, PhaseRun, first_two_layers_done, lookup,
};
use crate::SolverError;

const NAME: &str = "second layer";

const FLIP: [Move; 1] = Move::sequence(["Z2"]);
const NEXT_FACE: [Move; 1] = Move::sequence(["Y"]);

/// Inserts the edge at `FU` into `FR`. Applied to an edge already in a
/// middle slot, it pops that edge up into the top layer.
const RIGHT_ALGORITHM: [Move; 8] = Move::sequence(["U", "R", "U'", "R'", "U'", "F'", "U", "F"]);

/// Rotation bringing a middle-layer slot to `FR`, and the rotation undoing it.
const SLOT_TO_FR: [(Position, (&[Move], &[Move])); 3] = [
    (
        Position::BR,
        (&Move::sequence(["Y"]), &Move::sequence(["Y'"])),
    ),
    (
        Position::BL,
        (&Move::sequence(["Y2"]), &Move::sequence(["Y2"])),
    ),
    (
        Position::FL,
        (&Move::sequence(["Y'"]), &Move::sequence(["Y"])),
    ),
];

/// Turn of the top layer bringing a top edge to `FU`.
const TO_FU: [(Position, &[Move]); 4] = [
    (Position::FU, &[]),
    (Position::LU, &Move::sequence(["U'"])),
    (Position::RU, &Move::sequence(["U"])),
    (Position::BU, &Move::sequence(["U2"])),
];

/// Flips the finished white face to the bottom and inserts the four
/// middle-layer edges.
///
/// For every slot the edge between the front and right centers is located.
/// An edge stuck in a wrong middle slot, or flipped in `FR`, is popped into
/// the top layer first. It is then turned to `FU` and inserted with the
/// right-hand algorithm. A slot whose edge still ends up flipped is retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondLayer;

impl SecondLayer {
    /// Creates a new `SecondLayer` phase.
    #[must_use]
    pub const fn new() -> Self {
        SecondLayer
    }
}

impl Phase for SecondLayer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedPhase {
        Box::new(*self)
    }

    fn is_complete(&self, cube: &Cube) -> bool {
        first_two_layers_done(cube)
    }

    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError> {
        let mut run = PhaseRun::new(NAME, cube);
        run.perform("First layer complete, flip cube over", &FLIP);

        let mut solved = 0;
        let mut attempts = 0;
        while solved < 4 {
            if attempts == MAX_ATTEMPTS {
                return Err(run.stuck(attempts));
            }
            attempts += 1;

            let front = run.center(Facing::Front)?;
            let right = run.center(Facing::Right)?;
            run.group(format!("Solve {front} {right} edge"), |run| {
                solve_edge(run, front, right)?;
                if run.cube().is_placed(Position::FR) {
                    solved += 1;
                    if solved < 4 {
                        run.perform("Move on to next face", &NEXT_FACE);
                    }
                }
                Ok(())
            })?;
        }
        Ok(run.finish())
    }
}

fn solve_edge(run: &mut PhaseRun, front: Color, right: Color) -> Result<(), SolverError> {
    let colors = [front, right];

    let position = run.locate(&colors)?;
    if position == Position::FR && run.color_facing(position, front)? == Facing::Front {
        run.note("Already solved");
        return Ok(());
    }

    if position == Position::FR {
        run.perform(
            format!("Pop {front} {right} edge from FR to top layer"),
            &RIGHT_ALGORITHM,
        );
    } else if !position.contains_facing(Facing::Up) {
        let (there, back) = lookup(&SLOT_TO_FR, position)
            .ok_or_else(|| run.unexpected(format!("{front} {right} edge at {position}")))?;
        run.perform(format!("Rotate {position} slot to FR"), there);
        run.perform(
            format!("Pop {front} {right} edge from FR to top layer"),
            &RIGHT_ALGORITHM,
        );
        run.perform("Rotate cube back", back);
    }

    let position = run.locate(&colors)?;
    let turn = lookup(&TO_FU, position)
        .ok_or_else(|| run.unexpected(format!("{front} {right} edge at {position}")))?;
    if !turn.is_empty() {
        run.perform(format!("Move {front} {right} edge to FU"), turn);
    }
    run.perform(
        format!("Place {front} {right} edge from FU to FR"),
        &RIGHT_ALGORITHM,
    );
    Ok(())
}
