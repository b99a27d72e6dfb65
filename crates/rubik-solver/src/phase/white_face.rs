use rubik_core::{Color, Cube, Facing, Move, Position};

use super::{BoxedPhase, Phase, PhaseOutcome, PhaseRun, lookup, white_face_done};
use crate::SolverError;

const NAME: &str = "white face";

/// Brings a white corner to `DFR`, right below its target slot.
const TO_DFR: [(Position, &[Move]); 8] = [
    (Position::DFR, &[]),
    (Position::DFL, &Move::sequence(["D"])),
    (Position::BDL, &Move::sequence(["D2"])),
    (Position::BDR, &Move::sequence(["D'"])),
    (Position::FRU, &Move::sequence(["R'", "D'", "R", "D"])),
    (Position::FLU, &Move::sequence(["L", "D", "L'"])),
    (Position::BLU, &Move::sequence(["L'", "D'", "L", "D'"])),
    (Position::BRU, &Move::sequence(["R", "D'", "R'", "D'"])),
];

/// Lifts the corner at `DFR` into `FRU`, keyed by the facings of its white
/// and front-colored stickers.
const PLACE_CORNER: [((Facing, Facing), &[Move]); 3] = [
    ((Facing::Right, Facing::Front), &Move::sequence(["R'", "D'", "R"])),
    ((Facing::Front, Facing::Down), &Move::sequence(["F", "D", "F'"])),
    ((Facing::Down, Facing::Right), &Move::sequence(["R2", "D'", "R2", "D", "R2"])),
];

const NEXT_FACE: [Move; 1] = Move::sequence(["Y"]);

/// Completes the white face by inserting its four corners.
///
/// Each corner goes into `FRU` between the current front and right centers.
/// It is first moved to `DFR` and then lifted by one of three short
/// algorithms depending on where its white sticker points. The cube is turned
/// with `Y` between corners.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhiteFace;

impl WhiteFace {
    /// Creates a new `WhiteFace` phase.
    #[must_use]
    pub const fn new() -> Self {
        WhiteFace
    }
}

impl Phase for WhiteFace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedPhase {
        Box::new(*self)
    }

    fn is_complete(&self, cube: &Cube) -> bool {
        white_face_done(cube)
    }

    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError> {
        let mut run = PhaseRun::new(NAME, cube);
        for corner in 0..4 {
            let front = run.center(Facing::Front)?;
            let right = run.center(Facing::Right)?;
            run.group(format!("Solve white {front} {right} corner"), |run| {
                solve_corner(run, front, right)?;
                if corner != 3 {
                    run.perform("Move on to next face", &NEXT_FACE);
                }
                Ok(())
            })?;
        }
        Ok(run.finish())
    }
}

fn solve_corner(run: &mut PhaseRun, front: Color, right: Color) -> Result<(), SolverError> {
    let colors = [Color::White, front, right];

    let position = run.locate(&colors)?;
    if position == Position::FRU
        && run.color_facing(position, Color::White)? == Facing::Up
        && run.color_facing(position, front)? == Facing::Front
    {
        run.note("Already in FRU");
        return Ok(());
    }

    let setup = lookup(&TO_DFR, position)
        .ok_or_else(|| run.unexpected(format!("white corner at {position}")))?;
    run.perform(
        format!("Bring white {front} {right} corner from {position} to DFR"),
        setup,
    );

    let position = run.locate(&colors)?;
    let white_facing = run.color_facing(position, Color::White)?;
    let front_facing = run.color_facing(position, front)?;
    let place = lookup(&PLACE_CORNER, (white_facing, front_facing)).ok_or_else(|| {
        run.unexpected(format!(
            "white corner at {position} with white on {white_facing} and {front} on {front_facing}"
        ))
    })?;
    run.perform(format!("Place white {front} {right} corner"), place);
    Ok(())
}
