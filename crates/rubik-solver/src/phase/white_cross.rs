use rubik_core::{Color, Cube, Facing, Move, Position};

use super::{
    BoxedPhase, MAX_ATTEMPTS, Phase, PhaseOutcome, PhaseRun, lookup, white_cross_done,
};
use crate::SolverError;

const NAME: &str = "white cross";

/// Rotation bringing the white center from the given facing to the top.
const ORIENT_WHITE: [(Facing, &[Move]); 5] = [
    (Facing::Front, &Move::sequence(["X"])),
    (Facing::Down, &Move::sequence(["X2"])),
    (Facing::Back, &Move::sequence(["X'"])),
    (Facing::Left, &Move::sequence(["Z"])),
    (Facing::Right, &Move::sequence(["Z'"])),
];

/// Rotation bringing the given side face to the front.
const FACE_TO_FRONT: [(Facing, &[Move]); 3] = [
    (Facing::Right, &Move::sequence(["Y"])),
    (Facing::Left, &Move::sequence(["Y'"])),
    (Facing::Back, &Move::sequence(["Y2"])),
];

/// Moves an edge outside the front layer into it without disturbing solved
/// top edges.
const TO_FRONT_LAYER: [(Position, &[Move]); 8] = [
    (Position::RU, &Move::sequence(["R'"])),
    (Position::DR, &Move::sequence(["D'"])),
    (Position::LU, &Move::sequence(["L"])),
    (Position::DL, &Move::sequence(["D"])),
    (Position::BU, &Move::sequence(["B2", "D2"])),
    (Position::BR, &Move::sequence(["U'", "R2", "U"])),
    (Position::BL, &Move::sequence(["U", "L2", "U'"])),
    (Position::BD, &Move::sequence(["D2"])),
];

/// Inserts a front-layer edge at `FU`, keyed by the facings of its white and
/// colored stickers.
const PLACE_EDGE: [((Facing, Facing), &[Move]); 7] = [
    ((Facing::Left, Facing::Front), &Move::sequence(["F"])),
    ((Facing::Down, Facing::Front), &Move::sequence(["F2"])),
    ((Facing::Right, Facing::Front), &Move::sequence(["F'"])),
    ((Facing::Front, Facing::Up), &Move::sequence(["F", "U'", "R", "U"])),
    ((Facing::Front, Facing::Down), &Move::sequence(["F'", "U'", "R", "U"])),
    ((Facing::Front, Facing::Left), &Move::sequence(["U", "L'", "U'"])),
    ((Facing::Front, Facing::Right), &Move::sequence(["U'", "R", "U"])),
];

/// Builds the white cross on the top face.
///
/// The cube is first turned so that the white center is on top. Then, for
/// each side face whose top edge is wrong, the face is rotated to the front,
/// the white edge of its color is brought into the front layer and finally
/// inserted at `FU` with white facing up.
///
/// # Examples
///
/// ```
/// use rubik_core::{Cube, Move};
/// use rubik_solver::phase::{Phase, WhiteCross};
///
/// let mut cube = Cube::new();
/// cube.apply_all(Move::parse_sequence("F R U' L2 D B'")?);
///
/// let phase = WhiteCross::new();
/// let outcome = phase.solve(cube)?;
/// assert!(phase.is_complete(&outcome.cube));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct WhiteCross;

impl WhiteCross {
    /// Creates a new `WhiteCross` phase.
    #[must_use]
    pub const fn new() -> Self {
        WhiteCross
    }
}

impl Phase for WhiteCross {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedPhase {
        Box::new(*self)
    }

    fn is_complete(&self, cube: &Cube) -> bool {
        white_cross_done(cube)
    }

    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError> {
        let mut run = PhaseRun::new(NAME, cube);
        orient_white_up(&mut run)?;

        let mut attempts = 0;
        while let Some(face) = first_unsolved_side(run.cube()) {
            if attempts == MAX_ATTEMPTS {
                return Err(run.stuck(attempts));
            }
            attempts += 1;
            solve_edge(&mut run, face)?;
        }

        Ok(run.finish())
    }
}

fn orient_white_up(run: &mut PhaseRun) -> Result<(), SolverError> {
    let white = run
        .cube()
        .center_facing(Color::White)
        .ok_or_else(|| run.unexpected("no white center"))?;
    match lookup(&ORIENT_WHITE, white) {
        Some(rotation) => run.perform("Orient white center to top", rotation),
        None => run.note("White center already on top"),
    }
    Ok(())
}

fn side_edge(side: Facing) -> Position {
    Position::from_facing(side) | Position::U
}

/// Returns the first side face, in front-left-back-right order, whose top
/// edge is not white-up and matching the side center.
fn first_unsolved_side(cube: &Cube) -> Option<Facing> {
    Facing::SIDES.into_iter().find(|&side| {
        let edge = side_edge(side);
        !(cube.sticker(edge, Facing::Up) == Some(Color::White)
            && cube.sticker(edge, side) == cube.center_color(side))
    })
}

fn solve_edge(run: &mut PhaseRun, face: Facing) -> Result<(), SolverError> {
    let color = run.center(face)?;

    run.group(format!("Solve white {color} edge"), |run| {
        if let Some(rotation) = lookup(&FACE_TO_FRONT, face) {
            run.perform(format!("Rotate {color} center to front"), rotation);
        }

        let position = run.locate(&[Color::White, color])?;
        if !position.contains_facing(Facing::Front) {
            let setup = lookup(&TO_FRONT_LAYER, position)
                .ok_or_else(|| run.unexpected(format!("white {color} edge at {position}")))?;
            run.perform(
                format!("Bring white {color} edge from {position} to front layer"),
                setup,
            );
        }

        let position = run.locate(&[Color::White, color])?;
        let white_facing = run.color_facing(position, Color::White)?;
        let color_facing = run.color_facing(position, color)?;
        let place = lookup(&PLACE_EDGE, (white_facing, color_facing)).ok_or_else(|| {
            run.unexpected(format!(
                "white {color} edge with white on {white_facing} and {color} on {color_facing}"
            ))
        })?;
        run.perform(format!("Place white {color} edge"), place);
        Ok(())
    })
}
