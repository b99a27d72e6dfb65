use rubik_core::{Color, Cube, Facing, Move, Position};

use super::{
    BoxedPhase, MAX_ATTEMPTS, Phase, PhaseOutcome, PhaseRun, UP_CORNERS, UP_EDGES, lookup,
};
use crate::SolverError;

const NAME: &str = "yellow face";

/// Swaps the edges at `FU` and `LU`, leaving the other top edges in place.
const SWAP_EDGES: [Move; 8] = Move::sequence(["R", "U", "R'", "U", "R", "U2", "R'", "U"]);
/// Cycles the three top corners other than `FRU`.
const CYCLE_CORNERS: [Move; 8] = Move::sequence(["U", "R", "U'", "L'", "U", "R'", "U'", "L"]);
/// Repeated until the corner at `FRU` shows the top color. The bottom layer
/// comes back once all four corners are twisted.
const TWIST_CORNER: [Move; 4] = Move::sequence(["R'", "D'", "R", "D"]);
const U: Move = Move::from_token("U");
const Y_PRIME: Move = Move::from_token("Y'");
const Y2: Move = Move::from_token("Y2");

/// Turn of the top layer bringing a top edge to `FU`.
const TO_FU: [(Position, &[Move]); 4] = [
    (Position::FU, &[]),
    (Position::LU, &Move::sequence(["U'"])),
    (Position::RU, &Move::sequence(["U"])),
    (Position::BU, &Move::sequence(["U2"])),
];

/// Number of `U` turns bringing a top corner to `FRU`.
const CORNER_TO_FRU: [(Position, usize); 4] = [
    (Position::FRU, 0),
    (Position::BRU, 1),
    (Position::BLU, 2),
    (Position::FLU, 3),
];

/// Finishes the cube: permutes the top edges, permutes the top corners,
/// twists the top corners and turns the top layer into place.
#[derive(Debug, Default, Clone, Copy)]
pub struct YellowFace;

impl YellowFace {
    /// Creates a new `YellowFace` phase.
    #[must_use]
    pub const fn new() -> Self {
        YellowFace
    }
}

impl Phase for YellowFace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedPhase {
        Box::new(*self)
    }

    fn is_complete(&self, cube: &Cube) -> bool {
        cube.is_solved()
    }

    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError> {
        let mut run = PhaseRun::new(NAME, cube);
        let up = run.center(Facing::Up)?;

        place_edges(&mut run, up)?;
        run.group("Solve yellow corners", |run| {
            place_corners(run)?;
            orient_corners(run, up)
        })?;

        let front = run.center(Facing::Front)?;
        let turn = align_front_edge(&run, front, up)?;
        if !turn.is_empty() {
            run.perform("Turn top layer into place", turn);
        }

        Ok(run.finish())
    }
}

/// Returns `true` if the side sticker of a top edge matches the center below
/// it.
fn edge_is_placed(cube: &Cube, edge: Position) -> bool {
    edge.facings()
        .filter(|&facing| facing != Facing::Up)
        .all(|facing| cube.sticker(edge, facing) == cube.center_color(facing))
}

fn unplaced_edges(cube: &Cube) -> Vec<Position> {
    UP_EDGES
        .into_iter()
        .filter(|&edge| !edge_is_placed(cube, edge))
        .collect()
}

/// Returns `true` if a top corner carries the side colors of the top edges
/// next to it, regardless of its twist.
fn corner_is_placed(cube: &Cube, corner: Position) -> bool {
    let cubie = cube.cubie(corner);
    corner
        .facings()
        .filter(|&facing| facing != Facing::Up)
        .all(|facing| {
            let edge = Position::from_facing(facing) | Position::U;
            cube.sticker(edge, facing)
                .is_some_and(|color| cubie.has_color(color))
        })
}

fn align_front_edge(
    run: &PhaseRun,
    front: Color,
    up: Color,
) -> Result<&'static [Move], SolverError> {
    let position = run.locate(&[front, up])?;
    lookup(&TO_FU, position)
        .ok_or_else(|| run.unexpected(format!("{front} {up} edge at {position}")))
}

fn place_edges(run: &mut PhaseRun, up: Color) -> Result<(), SolverError> {
    if unplaced_edges(run.cube()).is_empty() {
        run.note("Yellow edges already placed");
        return Ok(());
    }

    run.group("Place yellow edges", |run| {
        let mut attempts = 0;
        loop {
            if unplaced_edges(run.cube()).is_empty() {
                return Ok(());
            }
            if attempts == MAX_ATTEMPTS {
                return Err(run.stuck(attempts));
            }
            attempts += 1;

            let front = run.center(Facing::Front)?;
            let turn = align_front_edge(run, front, up)?;
            if !turn.is_empty() {
                run.perform(format!("Turn yellow {front} edge to front"), turn);
            }

            let unplaced = unplaced_edges(run.cube());
            let has = |edge| unplaced.contains(&edge);
            match unplaced.len() {
                0 => {}
                2 if has(Position::BU) && has(Position::LU) => {
                    run.perform("Back and left edges out of place, rotate", &[Y_PRIME]);
                    run.perform("Swap FU and LU (apply algorithm)", &SWAP_EDGES);
                }
                2 if has(Position::BU) && has(Position::RU) => {
                    run.perform("Back and right edges out of place, rotate", &[Y2]);
                    run.perform("Swap FU and LU (apply algorithm)", &SWAP_EDGES);
                }
                2 if has(Position::LU) && has(Position::RU) => {
                    run.perform("Left and right edges out of place, turn top layer", &[U]);
                    run.perform("Swap FU and LU (apply algorithm)", &SWAP_EDGES);
                    run.perform("Rotate to the other pair", &[Y2]);
                    run.perform("Swap FU and LU (apply algorithm)", &SWAP_EDGES);
                }
                3 => {
                    let back = run.center(Facing::Back)?;
                    let rotation = if run.locate(&[back, up])? == Position::LU {
                        Y_PRIME
                    } else {
                        Y2
                    };
                    run.perform(
                        format!("Three edges out of place, rotate yellow {back} edge to a swap"),
                        &[rotation],
                    );
                    run.perform("Swap FU and LU (apply algorithm)", &SWAP_EDGES);
                }
                _ => {
                    return Err(
                        run.unexpected(format!("top edges out of place: {unplaced:?}"))
                    );
                }
            }
        }
    })
}

fn place_corners(run: &mut PhaseRun) -> Result<(), SolverError> {
    let placed_corners = |cube: &Cube| -> Vec<Position> {
        UP_CORNERS
            .into_iter()
            .filter(|&corner| corner_is_placed(cube, corner))
            .collect()
    };

    if placed_corners(run.cube()).len() == 4 {
        run.note("Corners already placed");
        return Ok(());
    }

    run.group("Place corners", |run| {
        let mut attempts = 0;
        loop {
            let placed = placed_corners(run.cube());
            match placed.as_slice() {
                [_, _, _, _] => return Ok(()),
                _ if attempts == MAX_ATTEMPTS => return Err(run.stuck(attempts)),
                [] => {
                    run.perform(
                        "No corner placed, place one (apply algorithm)",
                        &CYCLE_CORNERS,
                    );
                }
                &[corner] => {
                    let turns = lookup(&CORNER_TO_FRU, corner)
                        .ok_or_else(|| run.unexpected(format!("top corner at {corner}")))?;
                    if turns > 0 {
                        run.perform(
                            format!("Turn top layer until placed corner {corner} is at FRU"),
                            &vec![U; turns],
                        );
                    }
                    run.perform(
                        "Cycle the other corners (apply algorithm)",
                        &CYCLE_CORNERS,
                    );
                }
                _ => {
                    return Err(run.unexpected(format!("{} top corners placed", placed.len())));
                }
            }
            attempts += 1;
        }
    })
}

fn orient_corners(run: &mut PhaseRun, up: Color) -> Result<(), SolverError> {
    run.group("Orient corners", |run| {
        for corner in 1..=4 {
            let mut twists = 0;
            while run.sticker(Position::FRU, Facing::Up)? != up {
                if twists == 6 {
                    return Err(run.stuck(twists));
                }
                twists += 1;
                run.perform(
                    format!("Twist corner #{corner} (apply algorithm, round {twists})"),
                    &TWIST_CORNER,
                );
            }
            if corner < 4 {
                run.perform("Move on to next corner", &[U]);
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PhaseTester;

    const SWAP: &str = "R U R' U R U2 R' U";

    #[test]
    fn test_solved_cube_only_turns_top() {
        PhaseTester::new(Cube::new())
            .run(&YellowFace::new())
            .assert_complete(&YellowFace::new())
            .assert_moves("U U U U");
    }

    #[test]
    fn test_top_layer_turned() {
        PhaseTester::from_moves("U")
            .run(&YellowFace::new())
            .assert_complete(&YellowFace::new())
            .assert_replays();
    }

    #[test]
    fn test_swapped_edges() {
        PhaseTester::from_moves(SWAP)
            .run(&YellowFace::new())
            .assert_complete(&YellowFace::new())
            .assert_replays();
    }

    #[test]
    fn test_corner_cycles() {
        for setup in ["U R U' L' U R' U' L", "L' U R U' L U R'", "Y U R U' L' U R' U' L"] {
            PhaseTester::from_moves(setup)
                .run(&YellowFace::new())
                .assert_complete(&YellowFace::new())
                .assert_replays();
        }
    }

    #[test]
    fn test_twisted_corners() {
        // Twists FRU one way and BRU the other.
        PhaseTester::from_moves(
            "R' D' R D R' D' R D U R' D' R D R' D' R D R' D' R D R' D' R D U'",
        )
            .run(&YellowFace::new())
            .assert_complete(&YellowFace::new())
            .assert_replays();
    }

    #[test]
    fn test_edge_and_corner_placement() {
        assert!(edge_is_placed(&Cube::new(), Position::FU));
        let mut cube = Cube::new();
        cube.apply_all(Move::parse_sequence("U").unwrap());
        assert_eq!(unplaced_edges(&cube).len(), 4);
        assert!(UP_CORNERS.into_iter().all(|corner| corner_is_placed(&cube, corner)));
    }

    #[test]
    fn test_after_yellow_cross() {
        for scramble in [
            "R U F' L2 D B R' U2 F",
            "D2 B' L U2 F R' D L2 B U' R2 F' L' D2",
            "M E S X' U' R2 B F' D L' S2",
            "L' B2 D R U2 F' D' B L2 U R' F2",
            "B U2 L' F D2 R B' U L F2 D' R2",
        ] {
            PhaseTester::after_phases(scramble, 4)
                .run(&YellowFace::new())
                .assert_complete(&YellowFace::new())
                .assert_replays();
        }
    }
}
