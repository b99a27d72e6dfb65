//! Reachability checks for arbitrary cube states.
//!
//! A colored cube can be reached from the solved state by legal moves iff all
//! pieces are present, the corner twist sums to zero (mod 3), an even number of
//! edges is flipped, and the corner and edge permutations have equal parity.

use crate::{Color, Cube, Facing, Position};

/// The message reported for a cube that passes every check.
pub const VALID_CUBE: &str = "Valid Cube";

/// The reason a cube state cannot be reached from the solved cube.
///
/// Checks run in declaration order and only the first violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidCubeState {
    /// No center shows this color.
    #[display("Missing Center Piece {color}")]
    MissingCenter {
        /// The absent color.
        color: Color,
    },
    /// Two colors that belong on opposite faces have adjacent centers.
    #[display("{first} should be opposite of {second} in a standard cube")]
    OppositeMismatch {
        /// The first color of the pair.
        first: Color,
        /// The second color of the pair.
        second: Color,
    },
    /// No edge carries this pair of colors.
    #[display("Missing Edge Piece {} {}", colors[0], colors[1])]
    MissingEdge {
        /// The absent color pair.
        colors: [Color; 2],
    },
    /// No corner carries this triple of colors.
    #[display("Missing Corner Piece {} {} {}", colors[0], colors[1], colors[2])]
    MissingCorner {
        /// The absent color triple.
        colors: [Color; 3],
    },
    /// The corner twists do not cancel out.
    #[display("One corner rotated")]
    CornerTwist,
    /// An odd number of edges is flipped.
    #[display("Edge parity condition not fulfilled")]
    EdgeFlip,
    /// Corner and edge permutations have different parity.
    #[display("Permutation of cube not valid")]
    PermutationParity,
}

const CENTER_COLORS: [Color; 6] = [
    Color::White,
    Color::Orange,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::Yellow,
];

const EDGE_COLORS: [[Color; 2]; 12] = {
    use Color::{Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y};
    [
        [W, O],
        [W, B],
        [W, G],
        [W, R],
        [Y, R],
        [Y, B],
        [Y, G],
        [Y, O],
        [G, O],
        [B, O],
        [B, R],
        [R, G],
    ]
};

const CORNER_COLORS: [[Color; 3]; 8] = {
    use Color::{Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y};
    [
        [W, R, B],
        [W, R, G],
        [W, G, O],
        [W, B, O],
        [Y, R, B],
        [Y, R, G],
        [Y, G, O],
        [Y, B, O],
    ]
};

/// Clockwise facing order of each corner. A white or yellow sticker on the
/// first facing counts as a -1 twist, on the second as none, on the third as
/// +1.
const CORNER_TWIST_ORDER: [(Position, [Facing; 3]); 8] = {
    use Facing::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        (Position::FLU, [L, U, F]),
        (Position::FRU, [F, U, R]),
        (Position::DFL, [F, D, L]),
        (Position::DFR, [R, D, F]),
        (Position::BLU, [B, U, L]),
        (Position::BRU, [R, U, B]),
        (Position::BDL, [L, D, B]),
        (Position::BDR, [B, D, R]),
    ]
};

/// Facings that decide an edge's orientation, highest priority first.
const EDGE_PRIORITY: [Facing; 4] = [Facing::Front, Facing::Back, Facing::Up, Facing::Down];

impl Cube {
    /// Checks whether this cube can be reached from the solved state.
    ///
    /// # Errors
    ///
    /// Returns the first violated condition, checked in this order: centers,
    /// opposite centers, edge coverage, corner coverage, corner twist, edge
    /// flip, permutation parity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubik_core::{Color, Cube, Facing, InvalidCubeState, Position, Sticker};
    ///
    /// let mut cube = Cube::new();
    /// assert_eq!(cube.verify(), Ok(()));
    ///
    /// // Flip the front-up edge in place.
    /// cube.set_sticker(Sticker::new(Position::FU, Facing::Front, Color::Yellow))?;
    /// cube.set_sticker(Sticker::new(Position::FU, Facing::Up, Color::Red))?;
    /// assert_eq!(cube.verify(), Err(InvalidCubeState::EdgeFlip));
    /// # Ok::<(), rubik_core::StateImportError>(())
    /// ```
    pub fn verify(&self) -> Result<(), InvalidCubeState> {
        self.check_centers()?;
        self.check_opposite_centers()?;
        self.check_edge_coverage()?;
        self.check_corner_coverage()?;
        self.check_corner_twist()?;
        self.check_edge_flip()?;
        self.check_permutation_parity()?;
        Ok(())
    }

    /// Returns `"Valid Cube"` or the message of the first violated condition.
    #[must_use]
    pub fn verification_message(&self) -> String {
        match self.verify() {
            Ok(()) => VALID_CUBE.to_owned(),
            Err(err) => err.to_string(),
        }
    }

    fn check_centers(&self) -> Result<(), InvalidCubeState> {
        for color in CENTER_COLORS {
            if self.center_facing(color).is_none() {
                return Err(InvalidCubeState::MissingCenter { color });
            }
        }
        Ok(())
    }

    fn check_opposite_centers(&self) -> Result<(), InvalidCubeState> {
        for (first, second) in Color::OPPOSITE_PAIRS {
            let first_facing = self.center_facing(first);
            let second_facing = self.center_facing(second);
            if first_facing.map(Facing::opposite) != second_facing {
                return Err(InvalidCubeState::OppositeMismatch { first, second });
            }
        }
        Ok(())
    }

    fn check_edge_coverage(&self) -> Result<(), InvalidCubeState> {
        for colors in EDGE_COLORS {
            if self.search_by_colors(&colors).is_none() {
                return Err(InvalidCubeState::MissingEdge { colors });
            }
        }
        Ok(())
    }

    fn check_corner_coverage(&self) -> Result<(), InvalidCubeState> {
        for colors in CORNER_COLORS {
            if self.search_by_colors(&colors).is_none() {
                return Err(InvalidCubeState::MissingCorner { colors });
            }
        }
        Ok(())
    }

    fn check_corner_twist(&self) -> Result<(), InvalidCubeState> {
        let mut twist = 0;
        for (position, order) in CORNER_TWIST_ORDER {
            let index = order.iter().position(|&facing| {
                self.sticker(position, facing)
                    .is_some_and(Color::is_white_or_yellow)
            });
            twist += match index {
                Some(0) => 2,
                Some(2) => 1,
                _ => 0,
            };
        }
        if twist % 3 == 0 {
            Ok(())
        } else {
            Err(InvalidCubeState::CornerTwist)
        }
    }

    fn check_edge_flip(&self) -> Result<(), InvalidCubeState> {
        let flipped = Position::EDGES
            .into_iter()
            .filter(|&position| self.is_edge_flipped(position))
            .count();
        if flipped % 2 == 0 {
            Ok(())
        } else {
            Err(InvalidCubeState::EdgeFlip)
        }
    }

    fn is_edge_flipped(&self, position: Position) -> bool {
        let Some(facing) = EDGE_PRIORITY
            .into_iter()
            .find(|&facing| position.contains_facing(facing))
        else {
            return false;
        };
        let Some(color) = self.sticker(position, facing) else {
            return false;
        };
        if color.is_white_or_yellow() {
            return true;
        }
        let cubie = self.cubie(position);
        matches!(color, Color::Red | Color::Orange)
            && !cubie.has_color(Color::White)
            && !cubie.has_color(Color::Yellow)
    }

    fn check_permutation_parity(&self) -> Result<(), InvalidCubeState> {
        let corners = self
            .permutation_parity(&Position::CORNERS)
            .ok_or(InvalidCubeState::PermutationParity)?;
        let edges = self
            .permutation_parity(&Position::EDGES)
            .ok_or(InvalidCubeState::PermutationParity)?;
        if corners == edges {
            Ok(())
        } else {
            Err(InvalidCubeState::PermutationParity)
        }
    }

    /// Returns the parity (`true` for odd) of the permutation that carries each
    /// piece in `positions` to its home, or `None` if some piece has no home
    /// among `positions`.
    ///
    /// A piece's home is the set of faces whose centers carry its colors, so
    /// whole-cube rotations do not change the result.
    fn permutation_parity(&self, positions: &[Position]) -> Option<bool> {
        let mut homes = Vec::with_capacity(positions.len());
        for &position in positions {
            let home = self
                .cubie(position)
                .stickers()
                .map(|(_, color)| self.center_facing(color))
                .collect::<Option<Position>>()?;
            let index = positions.iter().position(|&p| p == home)?;
            homes.push(index);
        }

        let mut visited = vec![false; homes.len()];
        let mut cycles = 0;
        for start in 0..homes.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                current = homes[current];
            }
        }
        Some((homes.len() - cycles) % 2 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Sticker};

    fn set(cube: &mut Cube, position: Position, facing: Facing, color: Color) {
        cube.set_sticker(Sticker::new(position, facing, color))
            .unwrap();
    }

    #[test]
    fn test_solved_cube_is_valid() {
        let cube = Cube::new();
        assert_eq!(cube.verify(), Ok(()));
        assert_eq!(cube.verification_message(), VALID_CUBE);
    }

    #[test]
    fn test_scrambled_and_rotated_cubes_are_valid() {
        let mut cube = Cube::new();
        cube.apply_all(Move::parse_sequence("R U2 F' L D B2 X M' Y E2 Z S").unwrap());
        assert_eq!(cube.verify(), Ok(()));
    }

    #[test]
    fn test_missing_center() {
        let mut cube = Cube::new();
        set(&mut cube, Position::U, Facing::Up, Color::White);
        assert_eq!(
            cube.verify(),
            Err(InvalidCubeState::MissingCenter {
                color: Color::Yellow
            })
        );
        assert_eq!(cube.verification_message(), "Missing Center Piece Y");
    }

    #[test]
    fn test_opposite_mismatch() {
        let mut cube = Cube::new();
        set(&mut cube, Position::F, Facing::Front, Color::Green);
        set(&mut cube, Position::R, Facing::Right, Color::Red);
        assert_eq!(
            cube.verify(),
            Err(InvalidCubeState::OppositeMismatch {
                first: Color::Blue,
                second: Color::Green,
            })
        );
        assert_eq!(
            cube.verification_message(),
            "B should be opposite of G in a standard cube"
        );
    }

    #[test]
    fn test_missing_edge() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FU, Facing::Front, Color::White);
        assert_eq!(
            cube.verify(),
            Err(InvalidCubeState::MissingEdge {
                colors: [Color::Yellow, Color::Red]
            })
        );
        assert_eq!(cube.verification_message(), "Missing Edge Piece Y R");
    }

    #[test]
    fn test_missing_corner() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FRU, Facing::Up, Color::White);
        assert_eq!(
            cube.verify(),
            Err(InvalidCubeState::MissingCorner {
                colors: [Color::Yellow, Color::Red, Color::Green]
            })
        );
        assert_eq!(cube.verification_message(), "Missing Corner Piece Y R G");
    }

    #[test]
    fn test_twisted_corner() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FRU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FRU, Facing::Right, Color::Red);
        set(&mut cube, Position::FRU, Facing::Up, Color::Green);
        assert_eq!(cube.verify(), Err(InvalidCubeState::CornerTwist));
        assert_eq!(cube.verification_message(), "One corner rotated");
    }

    #[test]
    fn test_two_opposite_twists_cancel() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FRU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FRU, Facing::Right, Color::Red);
        set(&mut cube, Position::FRU, Facing::Up, Color::Green);
        set(&mut cube, Position::FLU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FLU, Facing::Up, Color::Blue);
        set(&mut cube, Position::FLU, Facing::Left, Color::Red);
        assert_eq!(cube.verify(), Ok(()));
    }

    #[test]
    fn test_same_direction_twists_add_up() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FRU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FRU, Facing::Right, Color::Red);
        set(&mut cube, Position::FRU, Facing::Up, Color::Green);
        set(&mut cube, Position::FLU, Facing::Left, Color::Yellow);
        set(&mut cube, Position::FLU, Facing::Up, Color::Red);
        set(&mut cube, Position::FLU, Facing::Front, Color::Blue);
        assert_eq!(cube.verify(), Err(InvalidCubeState::CornerTwist));
    }

    #[test]
    fn test_twists_made_by_moves_cancel() {
        // Twists FRU one way and BRU the other way, leaving everything else solved.
        let mut cube = Cube::new();
        cube.apply_all(
            Move::parse_sequence(
                "R' D' R D R' D' R D U R' D' R D R' D' R D R' D' R D R' D' R D U'",
            )
            .unwrap(),
        );
        assert_eq!(cube.sticker(Position::FRU, Facing::Front), Some(Color::Yellow));
        assert_eq!(cube.sticker(Position::BRU, Facing::Back), Some(Color::Yellow));
        let unplaced: Vec<_> = Position::ALL
            .into_iter()
            .filter(|&pos| !cube.is_placed(pos))
            .collect();
        assert_eq!(unplaced.len(), 2);
        assert_eq!(cube.verify(), Ok(()));
    }

    #[test]
    fn test_flipped_edge() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FU, Facing::Up, Color::Red);
        assert_eq!(cube.verify(), Err(InvalidCubeState::EdgeFlip));
    }

    #[test]
    fn test_swapped_edges() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FU, Facing::Front, Color::Red);
        set(&mut cube, Position::FU, Facing::Up, Color::Green);
        set(&mut cube, Position::FR, Facing::Front, Color::Red);
        set(&mut cube, Position::FR, Facing::Right, Color::Yellow);
        assert_eq!(cube.verify(), Err(InvalidCubeState::PermutationParity));
        assert_eq!(cube.verification_message(), "Permutation of cube not valid");
    }

    #[test]
    fn test_swapped_edges_and_corners_are_valid() {
        let mut cube = Cube::new();
        // Swap FU and FR as above ...
        set(&mut cube, Position::FU, Facing::Front, Color::Red);
        set(&mut cube, Position::FU, Facing::Up, Color::Green);
        set(&mut cube, Position::FR, Facing::Front, Color::Red);
        set(&mut cube, Position::FR, Facing::Right, Color::Yellow);
        // ... and DFL with DFR, keeping white on the down face.
        set(&mut cube, Position::DFL, Facing::Front, Color::Green);
        set(&mut cube, Position::DFL, Facing::Left, Color::Red);
        set(&mut cube, Position::DFR, Facing::Front, Color::Blue);
        set(&mut cube, Position::DFR, Facing::Right, Color::Red);
        assert_eq!(cube.verify(), Ok(()));
    }

    #[test]
    fn test_checks_are_reported_in_order() {
        let mut cube = Cube::new();
        set(&mut cube, Position::FU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FU, Facing::Up, Color::Red);
        set(&mut cube, Position::FRU, Facing::Front, Color::Yellow);
        set(&mut cube, Position::FRU, Facing::Right, Color::Red);
        set(&mut cube, Position::FRU, Facing::Up, Color::Green);
        assert_eq!(cube.verify(), Err(InvalidCubeState::CornerTwist));
    }
}
