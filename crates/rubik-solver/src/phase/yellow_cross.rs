use rubik_core::{Color, Cube, Facing, Move, Position};

use super::{BoxedPhase, Phase, PhaseOutcome, PhaseRun, UP_EDGES, yellow_cross_done};
use crate::SolverError;

const NAME: &str = "yellow cross";

const ALGORITHM: [Move; 6] = Move::sequence(["F", "R", "U", "R'", "U'", "F'"]);
const FROM_DOT: [Move; 19] = Move::sequence([
    "F", "R", "U", "R'", "U'", "F'", "U2", "F", "R", "U", "R'", "U'", "F'", "F", "R", "U", "R'",
    "U'", "F'",
]);
const Y: Move = Move::from_token("Y");

/// Orients the top edges so that they show a cross of the top center's color.
///
/// Depending on how many top edges already face up, `F R U R' U' F'` is used
/// to go from a dot to an L shape to a line and finally to the cross. The L
/// and the line are first rotated into the position the algorithm expects.
#[derive(Debug, Default, Clone, Copy)]
pub struct YellowCross;

impl YellowCross {
    /// Creates a new `YellowCross` phase.
    #[must_use]
    pub const fn new() -> Self {
        YellowCross
    }
}

impl Phase for YellowCross {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedPhase {
        Box::new(*self)
    }

    fn is_complete(&self, cube: &Cube) -> bool {
        yellow_cross_done(cube)
    }

    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError> {
        let mut run = PhaseRun::new(NAME, cube);
        let up = run.center(Facing::Up)?;
        let facing_up = |cube: &Cube, position| faces_up(cube, position, up);

        let count = UP_EDGES
            .into_iter()
            .filter(|&position| facing_up(run.cube(), position))
            .count();
        match count {
            4 => run.note("Yellow cross already solved"),
            0 => run.perform(
                "No yellow edge on top, apply algorithm, U2 and algorithm twice",
                &FROM_DOT,
            ),
            2 => {
                let cube = run.cube();
                let is_line = (facing_up(cube, Position::FU) && facing_up(cube, Position::BU))
                    || (facing_up(cube, Position::LU) && facing_up(cube, Position::RU));
                if !is_line {
                    run.group("Make yellow line", |run| {
                        let turns = rotations_until(run, |cube| {
                            facing_up(cube, Position::FU) && facing_up(cube, Position::RU)
                        })?;
                        if turns > 0 {
                            run.perform("Rotate yellow L to FU RU", &vec![Y; turns]);
                        }
                        run.perform("Turn L into line (apply algorithm)", &ALGORITHM);
                        Ok(())
                    })?;
                }

                let turns = rotations_until(&run, |cube| {
                    facing_up(cube, Position::LU) && facing_up(cube, Position::RU)
                })?;
                if turns == 0 {
                    run.note("Yellow line already at LU RU");
                } else {
                    run.perform("Rotate yellow line to LU RU", &vec![Y; turns]);
                }
                run.perform("Solve yellow cross (apply algorithm)", &ALGORITHM);
            }
            _ => {
                return Err(run.unexpected(format!("{count} top edges facing up")));
            }
        }

        Ok(run.finish())
    }
}

fn faces_up(cube: &Cube, position: Position, up: Color) -> bool {
    cube.sticker(position, Facing::Up) == Some(up)
}

/// Counts the `Y` rotations after which `pred` holds.
fn rotations_until(
    run: &PhaseRun,
    pred: impl Fn(&Cube) -> bool,
) -> Result<usize, SolverError> {
    let mut probe = run.cube().clone();
    for turns in 0..4 {
        if pred(&probe) {
            return Ok(turns);
        }
        probe.apply(Y);
    }
    Err(run.unexpected("top edges match no rotation"))
}
