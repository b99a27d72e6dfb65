//! Property tests for the move engine and the reachability checker.

use proptest::{collection::vec, prelude::*};

use crate::{Cube, Layer, Move, Turn};

fn any_move() -> impl Strategy<Value = Move> {
    (0..Layer::ALL.len(), 0..Turn::ALL.len())
        .prop_map(|(layer, turn)| Move::new(Layer::ALL[layer], Turn::ALL[turn]))
}

fn scrambled(moves: &[Move]) -> Cube {
    let mut cube = Cube::new();
    cube.apply_all(moves);
    cube
}

proptest! {
    #[test]
    fn test_sequence_then_inverse_restores(moves in vec(any_move(), 0..40)) {
        let mut cube = scrambled(&moves);
        for mv in moves.iter().rev() {
            cube.apply(mv.reverse());
        }
        prop_assert_eq!(cube, Cube::new());
    }

    #[test]
    fn test_moves_conserve_stickers(moves in vec(any_move(), 0..40)) {
        let cube = scrambled(&moves);
        prop_assert_eq!(cube.color_counts(), [9; 6]);
        for (position, cubie) in cube.cubies() {
            prop_assert_eq!(cubie.position(), position);
        }
    }

    #[test]
    fn test_moves_keep_cube_valid(moves in vec(any_move(), 0..40)) {
        prop_assert_eq!(scrambled(&moves).verify(), Ok(()));
    }

    #[test]
    fn test_quarter_turn_has_order_four(moves in vec(any_move(), 0..20), layer in 0..Layer::ALL.len()) {
        let start = scrambled(&moves);
        let quarter = Move::new(Layer::ALL[layer], Turn::Clockwise);
        let mut cube = start.clone();
        for _ in 0..4 {
            cube.apply(quarter);
        }
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn test_double_turn_equivalences(moves in vec(any_move(), 0..20), layer in 0..Layer::ALL.len()) {
        let start = scrambled(&moves);
        let layer = Layer::ALL[layer];
        let double = Move::new(layer, Turn::Double);

        let mut twice = start.clone();
        twice.apply(double);
        twice.apply(double);
        prop_assert_eq!(&twice, &start);

        let mut by_double = start.clone();
        by_double.apply(double);
        let mut by_quarters = start.clone();
        by_quarters.apply(Move::new(layer, Turn::Clockwise));
        by_quarters.apply(Move::new(layer, Turn::Clockwise));
        let mut by_reverse = start;
        by_reverse.apply(Move::new(layer, Turn::CounterClockwise));
        by_reverse.apply(Move::new(layer, Turn::CounterClockwise));
        prop_assert_eq!(&by_double, &by_quarters);
        prop_assert_eq!(&by_double, &by_reverse);
    }

    #[test]
    fn test_facelets_roundtrip(moves in vec(any_move(), 0..40)) {
        let cube = scrambled(&moves);
        prop_assert_eq!(Cube::from_facelets(&cube.to_facelets()), Ok(cube));
    }
}
