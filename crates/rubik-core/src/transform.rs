//! Sticker transfer tables for every layer.
//!
//! A clockwise quarter turn of a layer is described by a list of transfers.
//! Each transfer names a source cubie and a destination cubie by their facing
//! letters; the letters are paired positionally, so `("FLU", "FUR")` moves the
//! sticker facing `F` to `F`, `L` to `U` and `U` to `R`. A counterclockwise
//! turn uses every transfer with source and destination swapped.

use crate::{Facing, Layer, Position};

/// An ordered path of one to three facings naming a cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FacingPath {
    facings: [Facing; 3],
    len: usize,
    slot: usize,
}

impl FacingPath {
    const fn parse(letters: &str) -> Self {
        let bytes = letters.as_bytes();
        assert!(!bytes.is_empty() && bytes.len() <= 3, "bad facing path");
        let mut facings = [Facing::Front; 3];
        let mut position = Position::empty();
        let mut i = 0;
        while i < bytes.len() {
            let Some(facing) = Facing::from_letter(bytes[i] as char) else {
                panic!("bad facing letter");
            };
            facings[i] = facing;
            position = position.union(Position::from_facing(facing));
            i += 1;
        }
        let Some(slot) = position.slot() else {
            panic!("facing path does not name a cubie");
        };
        Self {
            facings,
            len: bytes.len(),
            slot,
        }
    }

    /// Index of the cubie in [`Position::ALL`].
    pub(crate) const fn slot(&self) -> usize {
        self.slot
    }

    pub(crate) fn facings(&self) -> &[Facing] {
        &self.facings[..self.len]
    }
}

/// Moves the stickers of one cubie onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transfer {
    pub(crate) source: FacingPath,
    pub(crate) target: FacingPath,
}

impl Transfer {
    const fn new(source: &str, target: &str) -> Self {
        let source = FacingPath::parse(source);
        let target = FacingPath::parse(target);
        assert!(source.len == target.len, "mismatched transfer lengths");
        Self { source, target }
    }

    /// Returns the transfer with its direction swapped.
    pub(crate) const fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

const F_TURN: [Transfer; 8] = [
    Transfer::new("FLU", "FUR"),
    Transfer::new("FUR", "FRD"),
    Transfer::new("FRD", "FDL"),
    Transfer::new("FDL", "FLU"),
    Transfer::new("FU", "FR"),
    Transfer::new("FR", "FD"),
    Transfer::new("FD", "FL"),
    Transfer::new("FL", "FU"),
];

const B_TURN: [Transfer; 8] = [
    Transfer::new("BLU", "BDL"),
    Transfer::new("BDL", "BRD"),
    Transfer::new("BRD", "BUR"),
    Transfer::new("BUR", "BLU"),
    Transfer::new("BU", "BL"),
    Transfer::new("BL", "BD"),
    Transfer::new("BD", "BR"),
    Transfer::new("BR", "BU"),
];

const R_TURN: [Transfer; 8] = [
    Transfer::new("RFU", "RUB"),
    Transfer::new("RUB", "RBD"),
    Transfer::new("RBD", "RDF"),
    Transfer::new("RDF", "RFU"),
    Transfer::new("RU", "RB"),
    Transfer::new("RB", "RD"),
    Transfer::new("RD", "RF"),
    Transfer::new("RF", "RU"),
];

const L_TURN: [Transfer; 8] = [
    Transfer::new("LFU", "LDF"),
    Transfer::new("LDF", "LBD"),
    Transfer::new("LBD", "LUB"),
    Transfer::new("LUB", "LFU"),
    Transfer::new("LU", "LF"),
    Transfer::new("LF", "LD"),
    Transfer::new("LD", "LB"),
    Transfer::new("LB", "LU"),
];

const U_TURN: [Transfer; 8] = [
    Transfer::new("ULB", "UBR"),
    Transfer::new("UBR", "URF"),
    Transfer::new("URF", "UFL"),
    Transfer::new("UFL", "ULB"),
    Transfer::new("UB", "UR"),
    Transfer::new("UR", "UF"),
    Transfer::new("UF", "UL"),
    Transfer::new("UL", "UB"),
];

const D_TURN: [Transfer; 8] = [
    Transfer::new("DFL", "DRF"),
    Transfer::new("DRF", "DBR"),
    Transfer::new("DBR", "DLB"),
    Transfer::new("DLB", "DFL"),
    Transfer::new("DF", "DR"),
    Transfer::new("DR", "DB"),
    Transfer::new("DB", "DL"),
    Transfer::new("DL", "DF"),
];

const M_TURN: [Transfer; 8] = [
    Transfer::new("UB", "FU"),
    Transfer::new("BD", "UB"),
    Transfer::new("DF", "BD"),
    Transfer::new("FU", "DF"),
    Transfer::new("U", "F"),
    Transfer::new("B", "U"),
    Transfer::new("D", "B"),
    Transfer::new("F", "D"),
];

const E_TURN: [Transfer; 8] = [
    Transfer::new("LF", "FR"),
    Transfer::new("BL", "LF"),
    Transfer::new("RB", "BL"),
    Transfer::new("FR", "RB"),
    Transfer::new("L", "F"),
    Transfer::new("B", "L"),
    Transfer::new("R", "B"),
    Transfer::new("F", "R"),
];

const S_TURN: [Transfer; 8] = [
    Transfer::new("UL", "RU"),
    Transfer::new("RU", "DR"),
    Transfer::new("DR", "LD"),
    Transfer::new("LD", "UL"),
    Transfer::new("U", "R"),
    Transfer::new("R", "D"),
    Transfer::new("D", "L"),
    Transfer::new("L", "U"),
];

const X_TURN: [Transfer; 24] = [
    Transfer::new("RFU", "RUB"),
    Transfer::new("RUB", "RBD"),
    Transfer::new("RBD", "RDF"),
    Transfer::new("RDF", "RFU"),
    Transfer::new("RU", "RB"),
    Transfer::new("RB", "RD"),
    Transfer::new("RD", "RF"),
    Transfer::new("RF", "RU"),
    Transfer::new("LDF", "LFU"),
    Transfer::new("LBD", "LDF"),
    Transfer::new("LUB", "LBD"),
    Transfer::new("LFU", "LUB"),
    Transfer::new("LF", "LU"),
    Transfer::new("LD", "LF"),
    Transfer::new("LB", "LD"),
    Transfer::new("LU", "LB"),
    Transfer::new("FU", "UB"),
    Transfer::new("UB", "BD"),
    Transfer::new("BD", "DF"),
    Transfer::new("DF", "FU"),
    Transfer::new("F", "U"),
    Transfer::new("U", "B"),
    Transfer::new("B", "D"),
    Transfer::new("D", "F"),
];

const Y_TURN: [Transfer; 24] = [
    Transfer::new("ULB", "UBR"),
    Transfer::new("UBR", "URF"),
    Transfer::new("URF", "UFL"),
    Transfer::new("UFL", "ULB"),
    Transfer::new("UB", "UR"),
    Transfer::new("UR", "UF"),
    Transfer::new("UF", "UL"),
    Transfer::new("UL", "UB"),
    Transfer::new("DRF", "DFL"),
    Transfer::new("DBR", "DRF"),
    Transfer::new("DLB", "DBR"),
    Transfer::new("DFL", "DLB"),
    Transfer::new("DR", "DF"),
    Transfer::new("DB", "DR"),
    Transfer::new("DL", "DB"),
    Transfer::new("DF", "DL"),
    Transfer::new("FR", "LF"),
    Transfer::new("LF", "BL"),
    Transfer::new("BL", "RB"),
    Transfer::new("RB", "FR"),
    Transfer::new("F", "L"),
    Transfer::new("L", "B"),
    Transfer::new("B", "R"),
    Transfer::new("R", "F"),
];

const Z_TURN: [Transfer; 24] = [
    Transfer::new("FLU", "FUR"),
    Transfer::new("FUR", "FRD"),
    Transfer::new("FRD", "FDL"),
    Transfer::new("FDL", "FLU"),
    Transfer::new("FU", "FR"),
    Transfer::new("FR", "FD"),
    Transfer::new("FD", "FL"),
    Transfer::new("FL", "FU"),
    Transfer::new("BDL", "BLU"),
    Transfer::new("BRD", "BDL"),
    Transfer::new("BUR", "BRD"),
    Transfer::new("BLU", "BUR"),
    Transfer::new("BL", "BU"),
    Transfer::new("BD", "BL"),
    Transfer::new("BR", "BD"),
    Transfer::new("BU", "BR"),
    Transfer::new("UL", "RU"),
    Transfer::new("RU", "DR"),
    Transfer::new("DR", "LD"),
    Transfer::new("LD", "UL"),
    Transfer::new("U", "R"),
    Transfer::new("R", "D"),
    Transfer::new("D", "L"),
    Transfer::new("L", "U"),
];

/// Returns the clockwise transfer table of `layer`.
pub(crate) const fn transfers(layer: Layer) -> &'static [Transfer] {
    match layer {
        Layer::F => &F_TURN,
        Layer::B => &B_TURN,
        Layer::L => &L_TURN,
        Layer::R => &R_TURN,
        Layer::U => &U_TURN,
        Layer::D => &D_TURN,
        Layer::X => &X_TURN,
        Layer::Y => &Y_TURN,
        Layer::Z => &Z_TURN,
        Layer::M => &M_TURN,
        Layer::E => &E_TURN,
        Layer::S => &S_TURN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_permutations() {
        for layer in Layer::ALL {
            let table = transfers(layer);
            let mut sources: Vec<_> = table.iter().map(|t| t.source.slot()).collect();
            let mut targets: Vec<_> = table.iter().map(|t| t.target.slot()).collect();
            sources.sort_unstable();
            targets.sort_unstable();
            assert_eq!(sources, targets, "{layer}");
            sources.dedup();
            assert_eq!(sources.len(), table.len(), "{layer}");
        }
    }

    #[test]
    fn test_paths_cover_their_cubies() {
        for layer in Layer::ALL {
            for transfer in transfers(layer) {
                for path in [transfer.source, transfer.target] {
                    let pos: Position = path.facings().iter().copied().collect();
                    assert_eq!(pos.slot(), Some(path.slot()));
                    assert_eq!(pos.facing_count(), path.facings().len());
                }
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        for layer in Layer::ALL {
            let expected = if layer.is_rotation() { 24 } else { 8 };
            assert_eq!(transfers(layer).len(), expected, "{layer}");
        }
    }

    #[test]
    fn test_reversed_swaps_paths() {
        let transfer = F_TURN[0];
        let reversed = transfer.reversed();
        assert_eq!(reversed.source, transfer.target);
        assert_eq!(reversed.target, transfer.source);
    }
}
