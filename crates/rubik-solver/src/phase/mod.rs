//! The five phases of the beginner (layer-by-layer) method.
//!
//! Each phase implements the [`Phase`] trait. A phase takes ownership of the
//! cube, turns it until its goal holds and hands the cube back together with
//! the moves it made and an explanation of why.

use std::fmt::Debug;

use rubik_core::{Color, Cube, Facing, Move, Position};

pub use self::{
    second_layer::SecondLayer, white_cross::WhiteCross, white_face::WhiteFace,
    yellow_cross::YellowCross, yellow_face::YellowFace,
};
pub(crate) use self::run::PhaseRun;
use crate::{Explanation, SolverError};

mod run;
mod second_layer;
mod white_cross;
mod white_face;
mod yellow_cross;
mod yellow_face;

/// Returns the beginner-method phases in solving order.
///
/// # Examples
///
/// ```
/// use rubik_solver::phase;
///
/// let names: Vec<_> = phase::all_phases().iter().map(|p| p.name()).collect();
/// assert_eq!(
///     names,
///     ["white cross", "white face", "second layer", "yellow cross", "yellow face"]
/// );
/// ```
#[must_use]
pub fn all_phases() -> Vec<BoxedPhase> {
    vec![
        Box::new(WhiteCross::new()),
        Box::new(WhiteFace::new()),
        Box::new(SecondLayer::new()),
        Box::new(YellowCross::new()),
        Box::new(YellowFace::new()),
    ]
}

/// The result of running one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOutcome {
    /// The cube after the phase.
    pub cube: Cube,
    /// The moves the phase applied, in order.
    pub moves: Vec<Move>,
    /// Described steps; its leaves hold exactly `moves`.
    pub explanation: Explanation,
}

/// A step of the layer-by-layer method.
pub trait Phase: Debug + Send + Sync {
    /// Returns the name of the phase.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the phase.
    fn clone_box(&self) -> BoxedPhase;

    /// Returns `true` if the goal of this phase (and of every earlier phase)
    /// holds for `cube`.
    fn is_complete(&self, cube: &Cube) -> bool;

    /// Runs the phase on a cube whose earlier phases are complete.
    ///
    /// # Errors
    ///
    /// Returns an internal [`SolverError`] if the cube reaches a state the
    /// phase's case tables do not cover.
    fn solve(&self, cube: Cube) -> Result<PhaseOutcome, SolverError>;
}

/// A boxed phase.
pub type BoxedPhase = Box<dyn Phase>;

impl Clone for BoxedPhase {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Upper bound on attempts of any per-piece loop: four times the four pieces
/// a phase handles.
const MAX_ATTEMPTS: usize = 16;

const UP_EDGES: [Position; 4] = [Position::FU, Position::LU, Position::BU, Position::RU];
const UP_CORNERS: [Position; 4] = [Position::FRU, Position::FLU, Position::BLU, Position::BRU];
const MIDDLE_EDGES: [Position; 4] = [Position::FR, Position::FL, Position::BL, Position::BR];
const DOWN_LAYER: [Position; 9] = [
    Position::D,
    Position::DF,
    Position::DL,
    Position::BD,
    Position::DR,
    Position::DFL,
    Position::DFR,
    Position::BDL,
    Position::BDR,
];

/// Finds the entry of a small case table.
fn lookup<K: PartialEq, T: Copy>(table: &[(K, T)], key: K) -> Option<T> {
    table
        .iter()
        .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
}

fn white_cross_done(cube: &Cube) -> bool {
    cube.center_color(Facing::Up) == Some(Color::White)
        && UP_EDGES.into_iter().all(|pos| cube.is_placed(pos))
}

fn white_face_done(cube: &Cube) -> bool {
    white_cross_done(cube) && UP_CORNERS.into_iter().all(|pos| cube.is_placed(pos))
}

fn first_two_layers_done(cube: &Cube) -> bool {
    cube.center_color(Facing::Down) == Some(Color::White)
        && DOWN_LAYER.into_iter().all(|pos| cube.is_placed(pos))
        && MIDDLE_EDGES.into_iter().all(|pos| cube.is_placed(pos))
}

fn yellow_cross_done(cube: &Cube) -> bool {
    let up = cube.center_color(Facing::Up);
    first_two_layers_done(cube)
        && UP_EDGES
            .into_iter()
            .all(|pos| cube.sticker(pos, Facing::Up) == up)
}
